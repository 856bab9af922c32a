// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The operations a mod list view drives.
//!
//! ```text
//!            ModManager
//!        +-------+--------+
//!        v                v
//!     ModTree      ConflictSelector
//!        |                ^
//!        +-- insert/remove/move/drop --> clear()
//!
//! load/save   <--> ModListStore     (JSON mod list)
//! export_data  --> GameConfigStore  (data= lines)
//! ```
//!
//! Every structural change clears the conflict highlight; the view is
//! expected to send a fresh selection afterwards.

mod add;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::conflict::{
    ConflictSelector, ConflictUpdate, ScanOptions, Selection, SelectionRejected,
};
use crate::error::{FsError, ModResult};
use crate::model::{Column, FieldValue, ItemFlags, ModEntry, ModTree, NodeId};
use crate::persist::{DATA_KEY, GameConfigStore, ModListStore};
use crate::transfer::{self, TransferPayload};

/// Mod tree plus conflict highlighting.
#[derive(Debug, Default)]
pub struct ModManager {
    tree: ModTree,
    selector: ConflictSelector,
}

impl ModManager {
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self {
            tree: ModTree::new(),
            selector: ConflictSelector::new(options),
        }
    }

    #[must_use]
    pub const fn tree(&self) -> &ModTree {
        &self.tree
    }

    #[must_use]
    pub const fn selector(&self) -> &ConflictSelector {
        &self.selector
    }

    /// Replaces the tree with the entries in `store`.
    ///
    /// # Errors
    ///
    /// Returns a `PersistError` if the entries cannot be read; the current
    /// tree is kept in that case.
    pub fn load(&mut self, store: &impl ModListStore) -> ModResult<()> {
        let entries = store.load()?;
        self.tree = ModTree::from_entries(&entries)?;
        self.selector.clear();
        info!(mods = self.tree.len(), "loaded mod list");
        Ok(())
    }

    /// Writes the tree to `store`.
    ///
    /// # Errors
    ///
    /// Returns a `PersistError` if the store cannot be written.
    pub fn save(&self, store: &mut impl ModListStore) -> ModResult<()> {
        store.save(&self.tree.entries())?;
        Ok(())
    }

    /// Folders of enabled nodes that exist on disk, in load order.
    ///
    /// Missing folders are logged and skipped; their enabled descendants
    /// still count.
    #[must_use]
    pub fn data_folders(&self) -> Vec<PathBuf> {
        self.tree
            .enabled_folders()
            .into_iter()
            .filter(|folder| {
                let exists = folder.is_dir();
                if !exists {
                    warn!(error = %FsError::missing(folder), "not exporting mod folder");
                }
                exists
            })
            .map(Path::to_path_buf)
            .collect()
    }

    /// Replaces the `data` lines of the game config with
    /// [`data_folders`](Self::data_folders). Does not save the store.
    pub fn export_data(&self, store: &mut impl GameConfigStore) -> Vec<String> {
        let values: Vec<String> = self
            .data_folders()
            .iter()
            .map(|folder| folder.display().to_string())
            .collect();
        info!(folders = values.len(), "exported data folders");
        store.set_values(DATA_KEY, values.clone());
        values
    }

    /// Inserts blank rows.
    ///
    /// # Errors
    ///
    /// Returns a `TreeError` for a stale parent or an out-of-range position.
    pub fn insert_rows(
        &mut self,
        parent: NodeId,
        position: usize,
        count: usize,
    ) -> ModResult<Vec<NodeId>> {
        let ids = self.tree.insert_children(parent, position, count)?;
        self.selector.clear();
        Ok(ids)
    }

    /// Removes rows and their subtrees.
    ///
    /// # Errors
    ///
    /// Returns a `TreeError` for a stale parent or an out-of-range range.
    pub fn remove_rows(&mut self, parent: NodeId, position: usize, count: usize) -> ModResult<()> {
        self.tree.remove_children(parent, position, count)?;
        self.selector.clear();
        Ok(())
    }

    /// Edits one cell.
    ///
    /// # Errors
    ///
    /// Returns a `TreeError` for the root or a stale node.
    pub fn set_field(&mut self, id: NodeId, value: FieldValue) -> ModResult<()> {
        self.tree.set_field(id, value)?;
        Ok(())
    }

    /// Moves subtrees; see [`ModTree::move_nodes`].
    ///
    /// # Errors
    ///
    /// Same as [`ModTree::move_nodes`].
    pub fn move_rows(
        &mut self,
        sources: &[NodeId],
        dest_parent: NodeId,
        dest_position: usize,
    ) -> ModResult<Vec<NodeId>> {
        let ids = self.tree.move_nodes(sources, dest_parent, dest_position)?;
        self.selector.clear();
        Ok(ids)
    }

    /// Payload for dragging or copying `nodes`.
    ///
    /// # Errors
    ///
    /// Returns an error for stale nodes or folders that cannot be encoded.
    pub fn mime_data(&self, nodes: &[NodeId]) -> ModResult<TransferPayload> {
        transfer::encode(&self.tree, nodes)
    }

    /// Returns whether a payload of `media_type` would be accepted.
    #[must_use]
    pub fn can_drop(&self, media_type: &str) -> bool {
        transfer::accepts(media_type)
    }

    /// Inserts a dropped payload.
    ///
    /// # Errors
    ///
    /// Same as [`transfer::deserialize_into`]; the tree is unchanged on error.
    pub fn drop_payload(
        &mut self,
        payload: &TransferPayload,
        parent: NodeId,
        position: usize,
    ) -> ModResult<Vec<NodeId>> {
        let ids = transfer::deserialize_into(&mut self.tree, payload, parent, position)?;
        self.selector.clear();
        Ok(ids)
    }

    /// Recomputes conflict highlighting for a view selection.
    ///
    /// # Errors
    ///
    /// Same as [`ConflictSelector::update_selection`].
    pub fn update_conflict_selection(
        &mut self,
        selection: &Selection,
    ) -> Result<ConflictUpdate, SelectionRejected> {
        self.selector.update_selection(&self.tree, selection)
    }

    /// Returns whether `id` is highlighted as conflicting.
    #[must_use]
    pub fn is_conflicting(&self, id: NodeId) -> bool {
        self.selector.is_flagged(id)
    }

    #[must_use]
    pub fn flags(&self, id: NodeId, column: Column) -> ItemFlags {
        self.tree.flags(id, column)
    }

    #[must_use]
    pub fn find_by_folder(&self, folder: &Path) -> Option<NodeId> {
        self.tree.find_by_folder(folder)
    }

    /// Detached copy of the whole tree.
    #[must_use]
    pub fn entries(&self) -> Vec<ModEntry> {
        self.tree.entries()
    }
}
