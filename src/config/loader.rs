// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings sources.
//!
//! ```text
//! openmwmm.toml (optional)      lowest
//! --config FILE (required)        |
//! inline TOML                     |
//! OPENMWMM_<SECTION>__<KEY>       v
//! --set key=value               highest
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Later sources win key by key; sections are never replaced wholesale.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// Keys whose environment value is a comma-separated list.
const ENV_LIST_KEYS: [&str; 1] = ["conflicts.ignore"];

/// How a TOML source entered the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A `--config` file; missing is an error.
    Required,
    /// The default file; skipped when absent.
    Optional,
    /// TOML handed over as a string.
    Inline,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "file",
            Self::Optional => "optional",
            Self::Inline => "string",
        })
    }
}

/// Accumulates settings sources, then merges them into a [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<(SourceKind, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Layers a settings file that must exist when building.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.push_file(path.as_ref(), SourceKind::Required)
    }

    /// Layers a settings file that is silently skipped if absent.
    ///
    /// Only files present right now show up in [`loaded_files`](Self::loaded_files).
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.push_file(path.as_ref(), SourceKind::Optional)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources
            .push((SourceKind::Inline, PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables at build time.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Pins `key` (dotted, e.g. `paths.mod_list`) above every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid dotted path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("cannot override '{key}'"))?;
        Ok(self)
    }

    /// Merges every source into a [`Config`].
    ///
    /// # Errors
    ///
    /// Fails on a missing `--config` file, malformed TOML, an environment
    /// value of the wrong type, or any unknown or mistyped key after merging.
    pub fn build(self) -> Result<Config> {
        let builder = match self.env_prefix.as_deref() {
            Some(prefix) => self.builder.add_source(env_source(prefix)),
            None => self.builder,
        };
        let merged = builder.build().context("cannot merge settings sources")?;
        Ok(merged.try_deserialize()?)
    }

    /// Sources that contributed, lowest precedence first.
    #[must_use]
    pub fn loaded_files(&self) -> &[(SourceKind, PathBuf)] {
        &self.sources
    }

    /// Numbered one-line descriptions of [`loaded_files`](Self::loaded_files).
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .zip(1..)
            .map(|((kind, path), n)| format!("{n}. [{kind}] {}", path.display()))
            .collect()
    }

    fn push_file(mut self, path: &Path, kind: SourceKind) -> Self {
        let required = kind == SourceKind::Required;
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.sources.push((kind, path.to_path_buf()));
        }
        self
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn env_source(prefix: &str) -> Environment {
    ENV_LIST_KEYS.iter().fold(
        Environment::with_prefix(prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}
