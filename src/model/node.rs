// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Node, handle and column types.
//!
//! ```text
//! Column:     Index | Name | Folder | Enabled   (fixed order, also the wire order)
//! FieldValue: one typed value per column
//! NodeId:     slot + generation, stale after the node is destroyed
//! ModEntry:   detached subtree (JSON shape, transfer decode target)
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Handle to a node inside a [`ModTree`](super::ModTree).
///
/// Handles never own anything. A handle whose node has been removed stays
/// stale forever, even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(super) slot: usize,
    pub(super) generation: u32,
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}v{}", self.slot, self.generation)
    }
}

/// Data columns of a mod node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Index,
    Name,
    Folder,
    Enabled,
}

impl Column {
    /// All columns in their fixed order.
    pub const ALL: [Self; 4] = [Self::Index, Self::Name, Self::Folder, Self::Enabled];

    /// Number of columns.
    pub const COUNT: usize = Self::ALL.len();

    /// Header label shown by views.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::Name => "Mod",
            Self::Folder => "Folder",
            Self::Enabled => "Enabled",
        }
    }

    /// Lowercase identifier used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Name => "name",
            Self::Folder => "folder",
            Self::Enabled => "enabled",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed value for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Index(usize),
    Name(String),
    Folder(PathBuf),
    Enabled(bool),
}

impl FieldValue {
    /// Column this value belongs to.
    #[must_use]
    pub const fn column(&self) -> Column {
        match self {
            Self::Index(_) => Column::Index,
            Self::Name(_) => Column::Name,
            Self::Folder(_) => Column::Folder,
            Self::Enabled(_) => Column::Enabled,
        }
    }
}

/// One entry of the load order: a mod, or a group of mods.
#[derive(Debug, Clone, Default)]
pub struct ModNode {
    pub(super) index: usize,
    pub(super) name: String,
    pub(super) folder: PathBuf,
    pub(super) enabled: bool,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl ModNode {
    pub(super) fn empty(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }

    /// Position among siblings, as of the last recalculation.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in load order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The root sentinel is the only node without a parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// A grouping node is any node with children.
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Current value of `column`.
    #[must_use]
    pub fn value(&self, column: Column) -> FieldValue {
        match column {
            Column::Index => FieldValue::Index(self.index),
            Column::Name => FieldValue::Name(self.name.clone()),
            Column::Folder => FieldValue::Folder(self.folder.clone()),
            Column::Enabled => FieldValue::Enabled(self.enabled),
        }
    }
}

/// A detached subtree.
///
/// This is the shape of one object in the JSON mod list and the result of
/// decoding a transfer payload. Missing JSON fields fall back to empty/false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub folder: PathBuf,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mods: Vec<ModEntry>,
}

impl ModEntry {
    /// Creates a leaf entry.
    pub fn new(name: impl Into<String>, folder: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            enabled,
            mods: Vec::new(),
        }
    }

    /// Replaces the children of this entry.
    #[must_use]
    pub fn with_mods(mut self, mods: Vec<Self>) -> Self {
        self.mods = mods;
        self
    }

    /// Number of entries in this subtree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.mods.iter().map(Self::node_count).sum::<usize>()
    }
}
