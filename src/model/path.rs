// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Textual node addresses.
//!
//! A path lists child positions from the root: `"2/0/1"` is the second child
//! of the first child of the third top-level node. `"root"` addresses the root.

use std::fmt;
use std::str::FromStr;

use super::node::NodeId;
use super::tree::ModTree;
use crate::error::TreeError;

/// Positional address of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the root sentinel.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Positions from the root, outermost first.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    /// Splits into the parent path and the last position.
    #[must_use]
    pub fn split_last(&self) -> Option<(Self, usize)> {
        let (last, rest) = self.0.split_last()?;
        Some((Self(rest.to_vec()), *last))
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(positions: Vec<usize>) -> Self {
        Self(positions)
    }
}

impl FromStr for NodePath {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("root") {
            return Ok(Self::root());
        }

        trimmed
            .split('/')
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|_| TreeError::InvalidPath(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        for (i, position) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{position}")?;
        }
        Ok(())
    }
}

impl ModTree {
    /// Resolves a path to a live handle.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidPath` if any position is out of range.
    pub fn resolve(&self, path: &NodePath) -> Result<NodeId, TreeError> {
        path.positions()
            .iter()
            .try_fold(self.root(), |current, position| {
                self.child(current, *position)
            })
            .ok_or_else(|| TreeError::InvalidPath(path.to_string()))
    }

    /// Current path of a node.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::StaleNode` if the handle is stale.
    pub fn path_of(&self, id: NodeId) -> Result<NodePath, TreeError> {
        self.node(id)?;
        let mut positions = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            positions.push(
                self.position_of(current)
                    .ok_or_else(|| TreeError::StaleNode(current.to_string()))?,
            );
            current = parent;
        }
        positions.reverse();
        Ok(NodePath(positions))
    }
}
