// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, ConflictsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::conflict::ScanOptions;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file log when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::WARN,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
        }
    }
}

/// Files the manager reads and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// JSON mod list.
    pub mod_list: PathBuf,
    /// OpenMW game config receiving `data=` lines.
    pub openmw_cfg: PathBuf,
    /// Folder new mods are usually picked from.
    pub default_mod_folder: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            mod_list: PathBuf::from("mods.json"),
            openmw_cfg: PathBuf::from("openmw.cfg"),
            default_mod_folder: None,
        }
    }
}

/// Conflict scanning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConflictsConfig {
    pub include_hidden: bool,
    pub follow_links: bool,
    pub case_sensitive: bool,
    /// Keep the folder index between selections.
    pub reuse_index: bool,
    /// Glob patterns, relative to the mod folder, never reported as conflicts.
    pub ignore: Vec<String>,
}

impl Default for ConflictsConfig {
    fn default() -> Self {
        Self {
            include_hidden: false,
            follow_links: false,
            case_sensitive: true,
            reuse_index: false,
            ignore: Vec::new(),
        }
    }
}

impl ConflictsConfig {
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::builder()
            .with_include_hidden(self.include_hidden)
            .with_follow_links(self.follow_links)
            .with_case_sensitive(self.case_sensitive)
            .with_reuse_index(self.reuse_index)
            .with_ignore(self.ignore.clone())
            .build()
    }
}
