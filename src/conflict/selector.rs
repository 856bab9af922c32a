// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::index::ConflictIndex;
use super::options::ScanOptions;
use crate::error::{ConflictError, ModError, ModResult, TreeError};
use crate::model::{Column, ModTree, NodeId};

/// One selected view cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub node: NodeId,
    pub column: Column,
}

impl Cell {
    #[must_use]
    pub const fn new(node: NodeId, column: Column) -> Self {
        Self { node, column }
    }
}

/// A view selection: ordered cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<Cell>);

impl Selection {
    #[must_use]
    pub const fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Every column of one row, as a row click produces.
    #[must_use]
    pub fn row(node: NodeId) -> Self {
        Self(Column::ALL.iter().map(|column| Cell::new(node, *column)).collect())
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First cell in the folder column.
    #[must_use]
    pub fn folder_cell(&self) -> Option<Cell> {
        self.0.iter().copied().find(|cell| cell.column == Column::Folder)
    }
}

/// Nodes whose highlight must be redrawn after a selection change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictUpdate {
    /// Previously flagged nodes that were cleared.
    pub cleared: Vec<NodeId>,
    /// Newly flagged nodes.
    pub flagged: Vec<NodeId>,
}

impl ConflictUpdate {
    /// Returns whether nothing needs redrawing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cleared.is_empty() && self.flagged.is_empty()
    }

    /// Every invalidated node, cleared first.
    pub fn invalidated(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.cleared.iter().chain(&self.flagged).copied()
    }
}

/// A selection the selector could not use.
///
/// The previous highlight is gone by the time this is returned, so `cleared`
/// still has to be redrawn.
#[derive(Debug, Error)]
#[error("conflict selection rejected")]
pub struct SelectionRejected {
    /// Previously flagged nodes that were cleared.
    pub cleared: Vec<NodeId>,
    #[source]
    pub source: ModError,
}

#[derive(Debug)]
struct CachedIndex {
    folders: BTreeSet<PathBuf>,
    revision: u64,
    index: ConflictIndex,
}

/// Tracks the current selection and the nodes conflicting with it.
#[derive(Debug, Default)]
pub struct ConflictSelector {
    options: ScanOptions,
    selection: Option<(Selection, u64)>,
    flagged: BTreeSet<NodeId>,
    cache: Option<CachedIndex>,
}

struct Walk<'a> {
    tree: &'a ModTree,
    selected: NodeId,
    folder: &'a Path,
    index: &'a ConflictIndex,
    flagged: BTreeSet<NodeId>,
}

impl Walk<'_> {
    /// Returns whether `id` or anything below it conflicts.
    fn visit(&mut self, id: NodeId) -> bool {
        if id == self.selected {
            return false;
        }
        let Some(node) = self.tree.get(id) else {
            return false;
        };

        if node.is_group() {
            let mut any = false;
            for child in node.children() {
                any |= self.visit(*child);
            }
            if any && !self.tree.is_ancestor_of(id, self.selected) {
                self.flagged.insert(id);
            }
            return any;
        }

        let folder = node.folder();
        if folder.as_os_str().is_empty() || folder == self.folder {
            return false;
        }
        let conflicting = self.index.overlaps(self.folder, folder);
        if conflicting {
            self.flagged.insert(id);
        }
        conflicting
    }
}

impl ConflictSelector {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Replaces the scan options, dropping any cached state.
    pub fn set_options(&mut self, options: ScanOptions) -> Vec<NodeId> {
        self.options = options;
        self.cache = None;
        self.clear()
    }

    /// Returns whether `id` is currently flagged.
    #[must_use]
    pub fn is_flagged(&self, id: NodeId) -> bool {
        self.flagged.contains(&id)
    }

    /// Currently flagged nodes.
    pub fn flagged(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.flagged.iter().copied()
    }

    /// Forgets the selection and the flagged set, returning the nodes that
    /// were flagged. Called after every structural change.
    pub fn clear(&mut self) -> Vec<NodeId> {
        self.selection = None;
        std::mem::take(&mut self.flagged).into_iter().collect()
    }

    /// Recomputes the flagged set for a new selection.
    ///
    /// Reselecting the same cells on an unchanged tree is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionRejected`] wrapping `ConflictError::NoFolderColumn`
    /// or `ConflictError::EmptyFolder` for unusable selections,
    /// `TreeError::StaleNode` for a removed node, and `FsError::InvalidPattern`
    /// for a bad ignore glob. The previous highlight is cleared either way and
    /// the error lists the nodes to redraw.
    pub fn update_selection(
        &mut self,
        tree: &ModTree,
        selection: &Selection,
    ) -> Result<ConflictUpdate, SelectionRejected> {
        if let Some((previous, revision)) = &self.selection
            && previous == selection
            && *revision == tree.revision()
        {
            return Ok(ConflictUpdate::default());
        }

        let cleared = self.clear();
        match self.flag_against(tree, selection) {
            Ok(flagged) => {
                self.flagged.clone_from(&flagged);
                self.selection = Some((selection.clone(), tree.revision()));
                Ok(ConflictUpdate {
                    cleared,
                    flagged: flagged.into_iter().collect(),
                })
            }
            Err(source) => Err(SelectionRejected { cleared, source }),
        }
    }

    fn flag_against(
        &mut self,
        tree: &ModTree,
        selection: &Selection,
    ) -> ModResult<BTreeSet<NodeId>> {
        if selection.is_empty() {
            return Ok(BTreeSet::new());
        }

        let Some(cell) = selection.folder_cell() else {
            warn!("conflict selection has no folder column");
            return Err(ConflictError::NoFolderColumn.into());
        };
        let selected = cell.node;
        let folder = tree
            .get(selected)
            .ok_or_else(|| TreeError::StaleNode(selected.to_string()))?
            .folder();
        if folder.as_os_str().is_empty() {
            warn!(node = %selected, "selected node has no folder");
            return Err(ConflictError::EmptyFolder.into());
        }

        let candidates = candidate_folders(tree, selected, folder);
        let index = self.index_for(tree, candidates)?;

        let flagged = if index.is_missing(folder) {
            BTreeSet::new()
        } else {
            let mut walk = Walk {
                tree,
                selected,
                folder,
                index,
                flagged: BTreeSet::new(),
            };
            for child in tree.children(tree.root()) {
                walk.visit(*child);
            }
            walk.flagged
        };

        debug!(
            node = %selected,
            folder = %folder.display(),
            flagged = flagged.len(),
            "updated conflict selection"
        );
        Ok(flagged)
    }

    fn index_for(
        &mut self,
        tree: &ModTree,
        folders: BTreeSet<PathBuf>,
    ) -> ModResult<&ConflictIndex> {
        let cache = match self.cache.take() {
            Some(cache)
                if self.options.reuse_index()
                    && cache.revision == tree.revision()
                    && cache.folders == folders =>
            {
                debug!(folders = folders.len(), "reusing conflict index");
                cache
            }
            _ => CachedIndex {
                index: ConflictIndex::build(folders.iter().map(PathBuf::as_path), &self.options)?,
                folders,
                revision: tree.revision(),
            },
        };
        Ok(&self.cache.insert(cache).index)
    }
}

/// The selected folder plus every leaf folder the walk may compare against.
fn candidate_folders(tree: &ModTree, selected: NodeId, folder: &Path) -> BTreeSet<PathBuf> {
    let mut folders = BTreeSet::from([folder.to_path_buf()]);
    let mut pending: Vec<NodeId> = tree.children(tree.root()).to_vec();
    while let Some(id) = pending.pop() {
        if id == selected {
            continue;
        }
        let Some(node) = tree.get(id) else {
            continue;
        };
        if node.is_group() {
            pending.extend_from_slice(node.children());
        } else if !node.folder().as_os_str().is_empty() {
            folders.insert(node.folder().to_path_buf());
        }
    }
    folders
}
