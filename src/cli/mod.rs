// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for openmwmm using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! openmwmm [global options] <command>
//! version | options
//! list
//! add <FOLDER> [--parent PATH] [--position N]
//! remove <PATH>
//! move <PATH>... --to <PARENT> [--position N]
//! enable <PATH> | disable <PATH>
//! rename <PATH> [--name NAME] [--folder FOLDER]
//! conflicts <PATH> [--files]
//! export [--config-file FILE]
//! ```

pub mod global;
pub mod mods;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::mods::{AddArgs, ConflictsArgs, ExportArgs, MoveArgs, NodeArgs, RenameArgs};
use clap::{Parser, Subcommand};

/// OpenMW Mod Manager
///
/// Keeps an ordered, nestable list of mod folders and writes it into
/// openmw.cfg.
#[derive(Debug, Parser)]
#[command(
    name = "openmwmm",
    author,
    version,
    about = "OpenMW Mod Manager",
    long_about = "openmwmm Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Keeps an ordered, nestable list of mod folders, shows which\n\
                  mods provide the same files, and writes the enabled folders\n\
                  as data= lines into openmw.cfg. See `openmwmm <command> --help`\n\
                  for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  openmwmm reads `openmwmm.toml` from the current directory if it\n\
                  exists, then every file given with --config in order. OPENMWMM_*\n\
                  environment variables (OPENMWMM_PATHS__MOD_LIST=...) and --set\n\
                  override them. Use --no-default-config to skip openmwmm.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Prints the mod tree with node paths.
    List,

    /// Adds a mod folder, with numbered subfolders as children.
    Add(AddArgs),

    /// Removes a mod and everything below it.
    Remove(NodeArgs),

    /// Moves mods to another position or group.
    Move(MoveArgs),

    /// Enables a mod.
    Enable(NodeArgs),

    /// Disables a mod and, on export, everything below it.
    Disable(NodeArgs),

    /// Changes the name or folder of a mod.
    Rename(RenameArgs),

    /// Lists the mods providing files that the selected mod also provides.
    Conflicts(ConflictsArgs),

    /// Writes the enabled mod folders into openmw.cfg as data= lines.
    Export(ExportArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
