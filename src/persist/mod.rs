// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! On-disk formats.
//!
//! ```text
//! ModListStore      load() / save()          JSON mod list
//!   JsonModList     { "mods": [...], "settings": {...}, ...other keys kept }
//!
//! GameConfigStore   values() / set_values()  key=value game config
//!   OpenMwConfig    openmw.cfg, data= lines written by export
//! ```
//!
//! The tree only ever sees [`ModEntry`] lists and folder lists; the formats
//! stay behind these traits.

mod json;
mod openmw_cfg;

pub use json::{DEFAULT_MOD_FOLDER, JsonModList};
pub use openmw_cfg::{DATA_KEY, OpenMwConfig};

use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::PersistError;
use crate::model::ModEntry;

/// Storage for the mod list.
pub trait ModListStore {
    /// Top-level entries, nested depth first.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Parse` for malformed entries.
    fn load(&self) -> Result<Vec<ModEntry>, PersistError>;

    /// Replaces the stored entries and writes them out.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Write` if the file cannot be written.
    fn save(&mut self, entries: &[ModEntry]) -> Result<(), PersistError>;
}

/// Storage for the multi-valued `key=value` game config.
pub trait GameConfigStore {
    /// Values of `key` in file order; empty when absent.
    fn values(&self, key: &str) -> &[String];

    /// Replaces every value of `key`.
    fn set_values(&mut self, key: &str, values: Vec<String>);

    /// Writes the config out.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Write` if the file cannot be written.
    fn save(&self) -> Result<(), PersistError>;
}

/// Writes `bytes` next to `path` and renames over it.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PersistError> {
    use std::io::Write;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| PersistError::write(path, e))?;
    }

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| PersistError::write(path, e))?;
    temp.write_all(bytes)
        .map_err(|e| PersistError::write(path, e))?;
    temp.persist(path)
        .map_err(|e| PersistError::write(path, e.error))?;
    Ok(())
}

/// Reads a file, mapping "not found" to `None`.
pub(crate) fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, PersistError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PersistError::read(path, e)),
    }
}
