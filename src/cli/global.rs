// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --set KEY=VAL     ← Direct config override (can repeat)
//! --mod-list FILE   ← paths.mod_list override
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← global.log_file override
//! --dry             ← Print instead of saving
//!
//! Precedence: CLI flags > --set > env > --config > openmwmm.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Key whose `--set` value is a comma-separated list.
const LIST_KEYS: &[&str] = &["conflicts.ignore"];

/// Value of a single configuration override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideValue {
    Scalar(String),
    List(Vec<String>),
}

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Sets an option, such as 'conflicts.reuse_index=true' or
    /// 'conflicts.ignore=docs/**,*.txt'. Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// JSON mod list to operate on.
    #[arg(short = 'm', long = "mod-list", value_name = "FILE")]
    pub mod_list: Option<PathBuf>,

    /// Console log level (0=off, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Prints what would be written instead of saving files.
    #[arg(long)]
    pub dry: bool,

    /// Disables auto loading of ./openmwmm.toml, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// `--set` entries come first so the dedicated flags win. Keys may use
    /// `/` or `.` between section and key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a `--set` entry without `=`
    /// or with an empty key.
    pub fn to_config_overrides(&self) -> Result<Vec<(String, OverrideValue)>, ConfigError> {
        let mut overrides = Vec::with_capacity(self.options.len() + 4);

        for option in &self.options {
            overrides.push(parse_override(option)?);
        }

        if let Some(level) = self.log_level {
            overrides.push(scalar("global.log_level", level.to_string()));
        }

        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(scalar("global.file_log_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(scalar("global.log_file", path.display().to_string()));
        }

        if let Some(ref path) = self.mod_list {
            overrides.push(scalar("paths.mod_list", path.display().to_string()));
        }

        Ok(overrides)
    }
}

fn scalar(key: &str, value: String) -> (String, OverrideValue) {
    (key.to_string(), OverrideValue::Scalar(value))
}

/// Parses one `KEY=VALUE` option.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when the option is malformed.
pub fn parse_override(option: &str) -> Result<(String, OverrideValue), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        section: "cli".to_string(),
        key: "--set".to_string(),
        message: format!("{message}: '{option}'"),
    };

    let (key, value) = option
        .split_once('=')
        .ok_or_else(|| invalid("expected KEY=VALUE"))?;
    let key = key.trim().replace('/', ".");
    if key.is_empty() {
        return Err(invalid("empty key"));
    }
    let value = value.trim();

    let value = if LIST_KEYS.contains(&key.as_str()) {
        OverrideValue::List(
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )
    } else {
        OverrideValue::Scalar(value.to_string())
    };
    Ok((key, value))
}
