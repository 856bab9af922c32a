// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Moves built on the transfer codec.
//!
//! ```text
//! validate --> encode sources --> decode (full) --> remove sources --> graft
//!    |                                 |
//!    +-- any failure: tree unchanged --+
//! ```

use tracing::debug;

use super::codec::{decode, encode};
use crate::error::{ModResult, TreeError};
use crate::model::{ModTree, NodeId};

impl ModTree {
    /// Moves the child at `source_position` of `source_parent` to
    /// `dest_position` among `dest_parent`'s children.
    ///
    /// `dest_position` is expressed in terms of the tree before the move.
    ///
    /// # Errors
    ///
    /// Same as [`move_nodes`](Self::move_nodes), plus `TreeError::OutOfBounds`
    /// when no child exists at `source_position`.
    pub fn move_subtree(
        &mut self,
        source_parent: NodeId,
        source_position: usize,
        dest_parent: NodeId,
        dest_position: usize,
    ) -> ModResult<NodeId> {
        let source = self.child(source_parent, source_position).ok_or_else(|| {
            TreeError::OutOfBounds {
                position: source_position,
                count: 1,
                child_count: self.child_count(source_parent),
            }
        })?;
        let ids = self.move_nodes(&[source], dest_parent, dest_position)?;
        ids.first()
            .copied()
            .ok_or_else(|| TreeError::StaleNode(source.to_string()).into())
    }

    /// Moves several subtrees so they end up consecutively at `dest_position`
    /// under `dest_parent`, in the order given.
    ///
    /// Sources nested inside another source travel with it. Returns the
    /// handles of the moved subtrees' new roots; old handles become stale.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::RootNotMovable`, `TreeError::StaleNode`,
    /// `TreeError::MoveIntoDescendant` or `TreeError::OutOfBounds` before any
    /// mutation.
    pub fn move_nodes(
        &mut self,
        sources: &[NodeId],
        dest_parent: NodeId,
        dest_position: usize,
    ) -> ModResult<Vec<NodeId>> {
        let child_count = self.node(dest_parent)?.child_count();
        if dest_position > child_count {
            return Err(TreeError::OutOfBounds {
                position: dest_position,
                count: sources.len(),
                child_count,
            }
            .into());
        }

        let mut moving: Vec<NodeId> = Vec::with_capacity(sources.len());
        for id in sources {
            if self.node(*id)?.is_root() {
                return Err(TreeError::RootNotMovable.into());
            }
            if !moving.contains(id) {
                moving.push(*id);
            }
        }
        let outermost: Vec<NodeId> = moving
            .iter()
            .copied()
            .filter(|id| !moving.iter().any(|other| self.is_ancestor_of(*other, *id)))
            .collect();

        if outermost
            .iter()
            .any(|id| *id == dest_parent || self.is_ancestor_of(*id, dest_parent))
        {
            return Err(TreeError::MoveIntoDescendant.into());
        }

        let payload = encode(self, &outermost)?;
        let entries = decode(payload.bytes())?;

        let shift = outermost
            .iter()
            .filter(|id| self.parent(**id) == Some(dest_parent))
            .filter(|id| self.position_of(**id).is_some_and(|p| p < dest_position))
            .count();

        for id in &outermost {
            let (Some(parent), Some(position)) = (self.parent(*id), self.position_of(*id)) else {
                return Err(TreeError::StaleNode(id.to_string()).into());
            };
            self.remove_children(parent, position, 1)?;
        }

        let ids = self.graft(dest_parent, dest_position - shift, &entries)?;
        debug!(
            dest = %dest_parent,
            position = dest_position - shift,
            count = ids.len(),
            "moved subtrees"
        );
        Ok(ids)
    }
}
