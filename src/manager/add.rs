// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Adding a mod folder from disk.
//!
//! ```text
//! /mods/Better Bodies/          -> "Better Bodies"   (enabled)
//!   00 Core/                    ->   "Core"          (enabled)
//!   01 Optional Textures/       ->   "Optional Textures"
//!   docs/                       ->   (ignored, no number prefix)
//! ```

use std::path::Path;

use regex::Regex;
use tracing::{debug, info};

use super::ModManager;
use crate::error::{FsError, ModError, ModResult};
use crate::model::{ModEntry, NodeId};
use crate::utility::fs::walk::subdirectories;

/// Builds the entry for `folder`, with numbered subfolders as children.
///
/// # Errors
///
/// Returns `FsError::MissingFolder` or `FsError::NotADirectory` if `folder`
/// cannot be listed.
fn mod_entry_for_folder(folder: &Path) -> ModResult<ModEntry> {
    let folder = std::path::absolute(folder).map_err(|source| FsError::IoError {
        path: folder.display().to_string(),
        source,
    })?;
    let subdirs = subdirectories(&folder)?;

    let pattern = Regex::new(r"^([0-9]+) (.+)$")
        .map_err(|e| ModError::Other(format!("failed to compile subfolder pattern: {e}").into()))?;

    let mut numbered: Vec<(u64, ModEntry)> = subdirs
        .into_iter()
        .filter_map(|dir| {
            let name = dir.file_name()?.to_str()?.to_string();
            let captures = pattern.captures(&name)?;
            let number = captures.get(1)?.as_str().parse::<u64>().ok()?;
            let label = captures.get(2)?.as_str().to_string();
            Some((number, ModEntry::new(label, dir, true)))
        })
        .collect();
    numbered.sort_by_key(|(number, _)| *number);
    debug!(
        folder = %folder.display(),
        numbered = numbered.len(),
        "scanned mod folder"
    );

    let name = folder
        .file_name()
        .map_or_else(|| folder.display().to_string(), |n| n.to_string_lossy().into_owned());
    let mods = numbered.into_iter().map(|(_, entry)| entry).collect();
    Ok(ModEntry::new(name, folder, true).with_mods(mods))
}

impl ModManager {
    /// Adds `folder` as a new enabled mod at `position` under `parent`.
    ///
    /// # Errors
    ///
    /// Returns `FsError::MissingFolder` if the folder does not exist and a
    /// `TreeError` for a bad parent or position. Nothing is inserted on error.
    pub fn add_mod_folder(
        &mut self,
        parent: NodeId,
        position: usize,
        folder: &Path,
    ) -> ModResult<NodeId> {
        let entry = mod_entry_for_folder(folder)?;
        let ids = self.tree.graft(parent, position, std::slice::from_ref(&entry))?;
        self.selector.clear();
        info!(name = %entry.name, folder = %entry.folder.display(), "added mod folder");
        ids.first()
            .copied()
            .ok_or_else(|| ModError::Other("no node inserted".into()))
    }
}
