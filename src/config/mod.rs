// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for openmwmm.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. openmwmm.toml (cwd, optional)
//! 3. --config (repeatable)
//! 4. OPENMWMM_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! Sections and keys are separated by a double underscore, since keys
//! themselves contain single underscores.
//!
//! ```text
//! OPENMWMM_GLOBAL__LOG_LEVEL=4        → global.log_level = 4
//! OPENMWMM_PATHS__MOD_LIST=/m.json    → paths.mod_list = "/m.json"
//! OPENMWMM_CONFLICTS__REUSE_INDEX=1   → conflicts.reuse_index = true
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{ConfigLoader, SourceKind};
pub use types::{ConflictsConfig, GlobalConfig, PathsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Mod list and game config locations.
    pub paths: PathsConfig,
    /// Conflict scan options.
    pub conflicts: ConflictsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openmwmm::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("openmwmm.toml")
    ///     .with_env_prefix("OPENMWMM")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_conflicts_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "paths.mod_list".into(),
            self.paths.mod_list.display().to_string(),
        );
        options.insert(
            "paths.openmw_cfg".into(),
            self.paths.openmw_cfg.display().to_string(),
        );
        options.insert(
            "paths.default_mod_folder".into(),
            fmt_path(self.paths.default_mod_folder.as_ref()),
        );
    }

    fn format_conflicts_options(&self, options: &mut BTreeMap<String, String>) {
        let conflicts = &self.conflicts;
        options.insert(
            "conflicts.include_hidden".into(),
            conflicts.include_hidden.to_string(),
        );
        options.insert(
            "conflicts.follow_links".into(),
            conflicts.follow_links.to_string(),
        );
        options.insert(
            "conflicts.case_sensitive".into(),
            conflicts.case_sensitive.to_string(),
        );
        options.insert(
            "conflicts.reuse_index".into(),
            conflicts.reuse_index.to_string(),
        );
        options.insert("conflicts.ignore".into(), conflicts.ignore.join(", "));
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
