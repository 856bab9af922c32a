// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hierarchical mod list.
//!
//! ```text
//! ModTree
//!   root (sentinel, no data)
//!    +-- [0] "Graphics"      /mods/graphics      enabled
//!    |     +-- [0] "Tex"     /mods/graphics/tex  enabled
//!    |     +-- [1] "Meshes"  /mods/graphics/mesh disabled
//!    +-- [1] "Quests"        /mods/quests        enabled
//! ```
//!
//! Sibling order is load order. Every node's `index` equals its position among
//! siblings after each structural change.

mod flags;
mod node;
mod path;
mod tree;

pub use flags::ItemFlags;
pub use node::{Column, FieldValue, ModEntry, ModNode, NodeId};
pub use path::NodePath;
pub use tree::{DepthFirst, ModTree};

#[cfg(test)]
mod tests;
