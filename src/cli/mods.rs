// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the commands that edit or inspect the mod list.
//!
//! Nodes are addressed by position paths from the root, as printed by
//! `list`: `0` is the first top-level mod, `2/1` the second child of the
//! third.

use clap::Args;
use std::path::PathBuf;

use crate::model::NodePath;

/// Arguments for add command.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Mod folder; relative paths are looked up in the default mod folder
    /// first.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Group to add the mod to.
    #[arg(short = 'p', long = "parent", value_name = "PATH", default_value = "root")]
    pub parent: NodePath,

    /// Position among the parent's children; appends when omitted.
    #[arg(short = 'n', long = "position", value_name = "N")]
    pub position: Option<usize>,
}

/// A single node.
#[derive(Debug, Clone, Args)]
pub struct NodeArgs {
    /// Node path, e.g. `0` or `2/1`.
    #[arg(value_name = "PATH")]
    pub path: NodePath,
}

/// Arguments for move command.
#[derive(Debug, Clone, Args)]
pub struct MoveArgs {
    /// Nodes to move; they keep their relative order.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<NodePath>,

    /// Destination group.
    #[arg(short = 't', long = "to", value_name = "PARENT")]
    pub to: NodePath,

    /// Position among the destination's children, counted before the move;
    /// appends when omitted.
    #[arg(short = 'n', long = "position", value_name = "N")]
    pub position: Option<usize>,
}

/// Arguments for rename command.
#[derive(Debug, Clone, Args)]
#[command(group(
    clap::ArgGroup::new("fields")
        .args(["name", "folder"])
        .required(true)
        .multiple(true)
))]
pub struct RenameArgs {
    /// Node path.
    #[arg(value_name = "PATH")]
    pub path: NodePath,

    /// New display name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// New mod folder.
    #[arg(long = "folder", value_name = "FOLDER")]
    pub folder: Option<PathBuf>,
}

/// Arguments for conflicts command.
#[derive(Debug, Clone, Args)]
pub struct ConflictsArgs {
    /// Selected node.
    #[arg(value_name = "PATH")]
    pub path: NodePath,

    /// Also list the shared files per conflicting mod.
    #[arg(short = 'f', long = "files")]
    pub files: bool,
}

/// Arguments for export command.
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Game config to write; defaults to `paths.openmw_cfg`.
    #[arg(long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,
}
