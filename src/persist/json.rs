// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, warn};

use super::{ModListStore, read_optional, write_atomic};
use crate::error::PersistError;
use crate::model::ModEntry;

/// Settings key holding the folder new mods are picked from.
pub const DEFAULT_MOD_FOLDER: &str = "defaultModFolder";

const MODS_KEY: &str = "mods";
const SETTINGS_KEY: &str = "settings";

/// JSON mod list document.
///
/// Root keys other than `mods` and `settings` are carried through untouched.
#[derive(Debug, Clone)]
pub struct JsonModList {
    path: PathBuf,
    document: Map<String, Value>,
}

impl JsonModList {
    /// Reads the document at `path`. A missing file gives an empty document.
    ///
    /// A root that is a bare array is read as the mod list itself.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Read` for unreadable files and
    /// `PersistError::Parse` for invalid JSON.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistError> {
        let path = path.as_ref().to_path_buf();
        let Some(bytes) = read_optional(&path)? else {
            warn!(path = %path.display(), "mod list not found, starting empty");
            return Ok(Self::empty(path));
        };

        let root: Value = serde_json::from_slice(&bytes).map_err(|e| PersistError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let document = match root {
            Value::Object(map) => map,
            Value::Array(mods) => Map::from_iter([(MODS_KEY.to_string(), Value::Array(mods))]),
            Value::Null => Map::new(),
            other => {
                return Err(PersistError::Parse {
                    path: path.display().to_string(),
                    message: format!("expected an object at the root, found {other}"),
                });
            }
        };
        Ok(Self { path, document })
    }

    /// A document with no entries and no settings.
    #[must_use]
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            document: Map::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// String value of a setting.
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.document
            .get(SETTINGS_KEY)
            .and_then(|settings| settings.get(key))
            .and_then(Value::as_str)
    }

    /// Sets a string setting, creating the settings object if needed.
    pub fn set_setting(&mut self, key: &str, value: impl Into<String>) {
        let settings = self
            .document
            .entry(SETTINGS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !settings.is_object() {
            *settings = Value::Object(Map::new());
        }
        if let Value::Object(settings) = settings {
            settings.insert(key.to_string(), Value::String(value.into()));
        }
    }

    /// Folder the add-mod picker starts in.
    #[must_use]
    pub fn default_mod_folder(&self) -> Option<PathBuf> {
        self.setting(DEFAULT_MOD_FOLDER).map(PathBuf::from)
    }

    /// Writes the current document.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Write` if the file cannot be written.
    pub fn flush(&self) -> Result<(), PersistError> {
        let bytes = serde_json::to_vec_pretty(&self.document).map_err(|e| PersistError::Parse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        write_atomic(&self.path, &bytes)?;
        info!(path = %self.path.display(), "saved mod list");
        Ok(())
    }
}

impl ModListStore for JsonModList {
    fn load(&self) -> Result<Vec<ModEntry>, PersistError> {
        match self.document.get(MODS_KEY) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(mods) => serde_json::from_value(mods.clone()).map_err(|e| PersistError::Parse {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn save(&mut self, entries: &[ModEntry]) -> Result<(), PersistError> {
        let mods = serde_json::to_value(entries).map_err(|e| PersistError::Parse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        self.document.insert(MODS_KEY.to_string(), mods);
        self.flush()
    }
}
