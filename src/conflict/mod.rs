// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File-level conflict detection between mod folders.
//!
//! ```text
//! Selection --(folder cell)--> selected folder
//!                                   |
//!          candidate leaf folders --+--> ConflictIndex (relative path -> folders)
//!                                   |
//! walk top-level nodes (skip selected subtree)
//!   leaf:  flagged if it shares a relative path with the selected folder
//!   group: flagged iff a descendant is flagged (never if an ancestor of the
//!          selection)
//! ```
//!
//! Missing folders are skipped with a warning; a missing selected folder
//! flags nothing.

mod index;
mod options;
mod selector;

pub use index::ConflictIndex;
pub use options::ScanOptions;
pub use selector::{Cell, ConflictSelector, ConflictUpdate, Selection, SelectionRejected};
