// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{GameConfigStore, read_optional, write_atomic};
use crate::error::PersistError;
use crate::utility::encoding::{Encoding, decode_text, utf8_to_bytes};

/// Key of the data directory lines.
pub const DATA_KEY: &str = "data";

/// `openmw.cfg`: a multi-map of `key=value` lines.
///
/// Keys are written back in sorted order; comments are not preserved.
#[derive(Debug, Clone, Default)]
pub struct OpenMwConfig {
    path: PathBuf,
    encoding: Encoding,
    entries: BTreeMap<String, Vec<String>>,
}

impl OpenMwConfig {
    /// Reads the config at `path`. A missing file gives an empty config.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Read` for unreadable files.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistError> {
        let path = path.as_ref().to_path_buf();
        let Some(bytes) = read_optional(&path)? else {
            warn!(path = %path.display(), "game config not found, starting empty");
            return Ok(Self {
                path,
                ..Self::default()
            });
        };

        let (text, encoding) = decode_text(&bytes);
        if encoding != Encoding::Utf8 {
            info!(path = %path.display(), ?encoding, "game config is not UTF-8");
        }
        let entries = parse(&text);
        Ok(Self {
            path,
            encoding,
            entries,
        })
    }

    /// Parses config text without touching the filesystem.
    #[must_use]
    pub fn from_text(path: PathBuf, text: &str) -> Self {
        Self {
            path,
            encoding: Encoding::Utf8,
            entries: parse(text),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encoding the file is written back in.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Appends one value to `key`.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(value.into());
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Renders every value as its own `key=value` line, keys sorted.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, values) in &self.entries {
            for value in values {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }
}

impl GameConfigStore for OpenMwConfig {
    fn values(&self, key: &str) -> &[String] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    fn set_values(&mut self, key: &str, values: Vec<String>) {
        if values.is_empty() {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.to_string(), values);
        }
    }

    fn save(&self) -> Result<(), PersistError> {
        let text = self.render();
        write_atomic(&self.path, &utf8_to_bytes(self.encoding, &text))?;
        info!(path = %self.path.display(), keys = self.entries.len(), "saved game config");
        Ok(())
    }
}

/// Splits each line at its first `=` and trims both sides. Blank lines,
/// `#` comments and lines without `=` are dropped.
fn parse(text: &str) -> BTreeMap<String, Vec<String>> {
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        entries
            .entry(key.trim().to_string())
            .or_default()
            .push(value.trim().to_string());
    }
    entries
}
