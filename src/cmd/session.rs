// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loaded mod list shared by the command handlers.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::manager::ModManager;
use crate::model::{NodeId, NodePath};
use crate::persist::{DEFAULT_MOD_FOLDER, JsonModList};

/// A mod list opened from `paths.mod_list`.
pub struct Session {
    store: JsonModList,
    manager: ModManager,
    default_mod_folder: Option<PathBuf>,
    dry: bool,
}

impl Session {
    /// Opens the configured mod list.
    ///
    /// # Errors
    ///
    /// Returns an error if the mod list exists but cannot be read or parsed.
    pub fn open(config: &Config, dry: bool) -> Result<Self> {
        let path = &config.paths.mod_list;
        let store = JsonModList::open(path)
            .with_context(|| format!("failed to open mod list {}", path.display()))?;
        let mut manager = ModManager::new(config.conflicts.scan_options());
        manager
            .load(&store)
            .with_context(|| format!("failed to load mod list {}", path.display()))?;

        let default_mod_folder = config
            .paths
            .default_mod_folder
            .clone()
            .or_else(|| store.default_mod_folder());

        Ok(Self {
            store,
            manager,
            default_mod_folder,
            dry,
        })
    }

    #[must_use]
    pub const fn manager(&self) -> &ModManager {
        &self.manager
    }

    pub const fn manager_mut(&mut self) -> &mut ModManager {
        &mut self.manager
    }

    #[must_use]
    pub const fn dry(&self) -> bool {
        self.dry
    }

    /// Configured folder, else the one remembered in the mod list.
    #[must_use]
    pub fn default_mod_folder(&self) -> Option<&std::path::Path> {
        self.default_mod_folder.as_deref()
    }

    /// Remembers the folder new mods were last picked from.
    pub fn remember_mod_folder(&mut self, folder: &std::path::Path) {
        self.store
            .set_setting(DEFAULT_MOD_FOLDER, folder.display().to_string());
    }

    /// Resolves a node path against the loaded tree.
    ///
    /// # Errors
    ///
    /// Returns an error if no node lives at `path`.
    pub fn resolve(&self, path: &NodePath) -> Result<NodeId> {
        self.manager
            .tree()
            .resolve(path)
            .with_context(|| format!("no mod at path '{path}'"))
    }

    /// Prints the position path of `id`, falling back to its handle.
    #[must_use]
    pub fn describe(&self, id: NodeId) -> String {
        self.manager
            .tree()
            .path_of(id)
            .map_or_else(|_| id.to_string(), |path| path.to_string())
    }

    /// Saves the mod list unless running dry.
    ///
    /// # Errors
    ///
    /// Returns an error if the mod list cannot be written.
    pub fn commit(mut self) -> Result<()> {
        if self.dry {
            info!(path = %self.store.path().display(), "dry run, mod list not saved");
            return Ok(());
        }
        self.manager
            .save(&mut self.store)
            .with_context(|| format!("failed to save mod list {}", self.store.path().display()))?;
        Ok(())
    }
}
