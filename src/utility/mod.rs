// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_text()    UTF-8 / Windows-1252 --> UTF-8
//!   utf8_to_bytes()  UTF-8 --> original encoding
//! fs
//!   walk:  relative_files(), subdirectories(), WalkOptions
//! ```

pub mod encoding;
pub mod fs;
