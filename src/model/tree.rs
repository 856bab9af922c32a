// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The mod tree: a slot arena owning every node.
//!
//! ```text
//! slots: [ root | n1 | n2 | (free) | n4 ... ]
//!          |      ^    ^
//!          +------+----+   children: Vec<NodeId>   (owning, load order)
//!                 parent: Option<NodeId>           (non-owning, lookup)
//!
//! insert_children / remove_children --> recalculate_indexes(parent, position)
//!                                   --> revision += 1
//! ```
//!
//! Removing a node frees its whole subtree and bumps each slot's generation,
//! so every handle into the removed subtree becomes stale.

use std::path::Path;

use tracing::debug;

use super::node::{FieldValue, ModEntry, ModNode, NodeId};
use crate::error::TreeError;

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<ModNode>,
}

/// Ordered, nestable list of mods.
#[derive(Debug, Clone)]
pub struct ModTree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    len: usize,
    revision: u64,
}

impl Default for ModTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ModTree {
    /// Creates a tree holding only the root sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(ModNode::empty(None)),
            }],
            free: Vec::new(),
            root: NodeId {
                slot: 0,
                generation: 0,
            },
            len: 0,
            revision: 0,
        }
    }

    /// Builds a tree from top-level entries, depth first.
    ///
    /// # Errors
    ///
    /// Never fails in practice; insertion into a fresh root is always in bounds.
    pub fn from_entries(entries: &[ModEntry]) -> Result<Self, TreeError> {
        let mut tree = Self::new();
        tree.graft(tree.root, 0, entries)?;
        Ok(tree)
    }

    /// Handle of the root sentinel.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes, excluding the root.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Structural revision, incremented by every insert and remove.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ModNode> {
        self.slots
            .get(id.slot)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut ModNode> {
        self.slots
            .get_mut(id.slot)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Looks up a node, failing on stale handles.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::StaleNode` if the node has been removed.
    pub fn node(&self, id: NodeId) -> Result<&ModNode, TreeError> {
        self.get(id)
            .ok_or_else(|| TreeError::StaleNode(id.to_string()))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut ModNode, TreeError> {
        self.get_mut(id)
            .ok_or_else(|| TreeError::StaleNode(id.to_string()))
    }

    /// Child of `parent` at `position`.
    #[must_use]
    pub fn child(&self, parent: NodeId, position: usize) -> Option<NodeId> {
        self.get(parent)
            .and_then(|node| node.children.get(position))
            .copied()
    }

    /// Number of children; zero for stale handles.
    #[must_use]
    pub fn child_count(&self, parent: NodeId) -> usize {
        self.get(parent).map_or(0, ModNode::child_count)
    }

    /// Children in load order; empty for stale handles.
    #[must_use]
    pub fn children(&self, parent: NodeId) -> &[NodeId] {
        self.get(parent).map_or(&[], ModNode::children)
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(ModNode::parent)
    }

    /// Structural position of `id` among its siblings.
    ///
    /// The root reports position 0. Stale handles report `None`.
    #[must_use]
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        let node = self.get(id)?;
        match node.parent {
            None => Some(0),
            Some(parent) => self
                .children(parent)
                .iter()
                .position(|child| *child == id),
        }
    }

    /// Iterates the parent chain of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// Returns whether `ancestor` is a strict ancestor of `id`.
    #[must_use]
    pub fn is_ancestor_of(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|candidate| candidate == ancestor)
    }

    /// Pre-order iteration over every node except the root, with depth
    /// (top-level nodes have depth 0).
    #[must_use]
    pub fn depth_first(&self) -> DepthFirst<'_> {
        self.descendants(self.root)
    }

    /// Pre-order iteration over the strict descendants of `id`.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DepthFirst<'_> {
        let stack = self
            .children(id)
            .iter()
            .rev()
            .map(|child| (*child, 0))
            .collect();
        DepthFirst { tree: self, stack }
    }

    /// Inserts `count` empty nodes at `position` among `parent`'s children.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::OutOfBounds` if `position > child_count`, or
    /// `TreeError::StaleNode` if `parent` is gone. Nothing is mutated on error.
    pub fn insert_children(
        &mut self,
        parent: NodeId,
        position: usize,
        count: usize,
    ) -> Result<Vec<NodeId>, TreeError> {
        let child_count = self.node(parent)?.child_count();
        if position > child_count {
            return Err(TreeError::OutOfBounds {
                position,
                count,
                child_count,
            });
        }

        let ids: Vec<NodeId> = (0..count)
            .map(|_| self.alloc(ModNode::empty(Some(parent))))
            .collect();
        let children = &mut self.node_mut(parent)?.children;
        let tail = children.split_off(position);
        children.extend(ids.iter().copied());
        children.extend(tail);
        self.len += count;
        self.revision += 1;
        self.recalculate_indexes(parent, position);

        debug!(parent = %parent, position, count, "inserted children");
        Ok(ids)
    }

    /// Removes `count` children starting at `position`, destroying their
    /// subtrees.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::OutOfBounds` if `position + count > child_count`, or
    /// `TreeError::StaleNode` if `parent` is gone. Nothing is mutated on error.
    pub fn remove_children(
        &mut self,
        parent: NodeId,
        position: usize,
        count: usize,
    ) -> Result<(), TreeError> {
        let child_count = self.node(parent)?.child_count();
        if position
            .checked_add(count)
            .is_none_or(|end| end > child_count)
        {
            return Err(TreeError::OutOfBounds {
                position,
                count,
                child_count,
            });
        }

        let removed: Vec<NodeId> = self
            .node_mut(parent)?
            .children
            .drain(position..position + count)
            .collect();
        for id in removed {
            self.release(id);
        }
        self.revision += 1;
        self.recalculate_indexes(parent, position);

        debug!(parent = %parent, position, count, "removed children");
        Ok(())
    }

    /// Sets one field of a node.
    ///
    /// An `Index` value is never taken as given: the node's structural
    /// position is stored instead.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::StaleNode` for removed nodes and
    /// `TreeError::RootNotEditable` for the root sentinel.
    pub fn set_field(&mut self, id: NodeId, value: FieldValue) -> Result<(), TreeError> {
        let position = self
            .position_of(id)
            .ok_or_else(|| TreeError::StaleNode(id.to_string()))?;
        let node = self.node_mut(id)?;
        if node.is_root() {
            return Err(TreeError::RootNotEditable);
        }

        match value {
            FieldValue::Index(_) => node.index = position,
            FieldValue::Name(name) => node.name = name,
            FieldValue::Folder(folder) => node.folder = folder,
            FieldValue::Enabled(enabled) => node.enabled = enabled,
        }
        Ok(())
    }

    /// Stores each sibling's position, from `start_at` to the end.
    pub fn recalculate_indexes(&mut self, parent: NodeId, start_at: usize) {
        for position in start_at..self.child_count(parent) {
            if let Some(child) = self.child(parent, position)
                && let Some(node) = self.get_mut(child)
            {
                node.index = position;
            }
        }
    }

    /// Inserts detached subtrees at `position`, depth first.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`insert_children`](Self::insert_children);
    /// the bounds are checked before anything is inserted.
    pub fn graft(
        &mut self,
        parent: NodeId,
        position: usize,
        entries: &[ModEntry],
    ) -> Result<Vec<NodeId>, TreeError> {
        let ids = self.insert_children(parent, position, entries.len())?;
        for (id, entry) in ids.iter().zip(entries) {
            self.fill(*id, entry)?;
        }
        Ok(ids)
    }

    fn fill(&mut self, id: NodeId, entry: &ModEntry) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        node.name.clone_from(&entry.name);
        node.folder.clone_from(&entry.folder);
        node.enabled = entry.enabled;

        if !entry.mods.is_empty() {
            let children = self.insert_children(id, 0, entry.mods.len())?;
            for (child, child_entry) in children.iter().zip(&entry.mods) {
                self.fill(*child, child_entry)?;
            }
        }
        Ok(())
    }

    /// Detached copy of the subtree rooted at `id`.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::StaleNode` if `id` has been removed.
    pub fn entry(&self, id: NodeId) -> Result<ModEntry, TreeError> {
        let node = self.node(id)?;
        let mods = node
            .children
            .iter()
            .map(|child| self.entry(*child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ModEntry {
            name: node.name.clone(),
            folder: node.folder.clone(),
            enabled: node.enabled,
            mods,
        })
    }

    /// Top-level entries; this is what the root saves as.
    #[must_use]
    pub fn entries(&self) -> Vec<ModEntry> {
        self.children(self.root)
            .iter()
            .filter_map(|child| self.entry(*child).ok())
            .collect()
    }

    /// First node in pre-order whose folder equals `folder`.
    #[must_use]
    pub fn find_by_folder(&self, folder: &Path) -> Option<NodeId> {
        self.depth_first()
            .map(|(id, _)| id)
            .find(|id| self.get(*id).is_some_and(|node| node.folder == folder))
    }

    /// Folders of every enabled node in pre-order.
    ///
    /// A disabled node hides itself and its whole subtree. Empty folders are
    /// skipped.
    #[must_use]
    pub fn enabled_folders(&self) -> Vec<&Path> {
        let mut folders = Vec::new();
        self.collect_enabled(self.root, &mut folders);
        folders
    }

    fn collect_enabled<'a>(&'a self, id: NodeId, folders: &mut Vec<&'a Path>) {
        let Some(node) = self.get(id) else {
            return;
        };
        if !node.is_root() {
            if !node.enabled {
                return;
            }
            if !node.folder.as_os_str().is_empty() {
                folders.push(&node.folder);
            }
        }
        for child in &node.children {
            self.collect_enabled(*child, folders);
        }
    }

    fn alloc(&mut self, node: ModNode) -> NodeId {
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot];
            entry.node = Some(node);
            NodeId {
                slot,
                generation: entry.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId {
                slot: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(slot) = self
                .slots
                .get_mut(current.slot)
                .filter(|slot| slot.generation == current.generation)
            else {
                continue;
            };
            if let Some(node) = slot.node.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.slot);
                self.len -= 1;
                pending.extend(node.children);
            }
        }
    }
}

/// Pre-order iterator yielding `(node, depth)`.
pub struct DepthFirst<'a> {
    tree: &'a ModTree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for DepthFirst<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        self.stack.extend(
            self.tree
                .children(id)
                .iter()
                .rev()
                .map(|child| (*child, depth + 1)),
        );
        Some((id, depth))
    }
}
