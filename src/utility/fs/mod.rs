// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for scanning mod folders.
//!
//! ```text
//! walk:  relative_files()  ignore::Walk (serial), '/'-joined relative paths
//!        subdirectories()  immediate child directories
//!        WalkOptions       max_depth, hidden, symlinks, wax ignore globs
//! ```

pub mod walk;
