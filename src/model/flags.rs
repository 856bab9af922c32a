// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-cell interaction capabilities for views.

use bitflags::bitflags;

use super::node::{Column, NodeId};
use super::tree::ModTree;

bitflags! {
    /// What a view may do with one cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        const SELECTABLE = 1;
        const EDITABLE = 1 << 1;
        const DRAG_ENABLED = 1 << 2;
        const DROP_ENABLED = 1 << 3;
        const USER_CHECKABLE = 1 << 4;
    }
}

impl ItemFlags {
    /// Flags for a regular (non-root) node's cell.
    #[must_use]
    pub const fn for_column(column: Column) -> Self {
        match column {
            Column::Index => Self::SELECTABLE.union(Self::DRAG_ENABLED),
            Column::Name | Column::Folder => Self::SELECTABLE.union(Self::EDITABLE),
            Column::Enabled => Self::SELECTABLE.union(Self::USER_CHECKABLE),
        }
    }
}

impl ModTree {
    /// Flags for a cell; the root and unknown handles only accept drops.
    #[must_use]
    pub fn flags(&self, id: NodeId, column: Column) -> ItemFlags {
        match self.get(id) {
            Some(node) if !node.is_root() => ItemFlags::for_column(column),
            _ => ItemFlags::DROP_ENABLED,
        }
    }
}
