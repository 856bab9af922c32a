// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> Session (mods.json) --> ModManager
//!   config, list, edit, conflicts, export
//! ```

pub mod config;
pub mod conflicts;
pub mod edit;
pub mod export;
pub mod list;
pub mod session;
