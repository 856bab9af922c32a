// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commands that change the mod list.
//!
//! ```text
//! Session::open --> resolve paths --> ModManager op --> commit (unless --dry)
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tracing::debug;

use crate::cli::mods::{AddArgs, MoveArgs, NodeArgs, RenameArgs};
use crate::cmd::session::Session;
use crate::config::Config;
use crate::error::Result;
use crate::model::FieldValue;

/// Relative folders that do not exist here are taken from the default mod
/// folder.
fn resolve_mod_folder(folder: &Path, default_mod_folder: Option<&Path>) -> PathBuf {
    match default_mod_folder {
        Some(base) if folder.is_relative() && !folder.exists() => base.join(folder),
        _ => folder.to_path_buf(),
    }
}

/// Main handler for add command.
///
/// # Errors
///
/// Returns an error if the folder does not exist, the parent path is invalid,
/// or the mod list cannot be saved.
pub fn run_add_command(args: &AddArgs, config: &Config, dry: bool) -> Result<()> {
    let mut session = Session::open(config, dry)?;
    let folder = resolve_mod_folder(&args.folder, session.default_mod_folder());
    let parent = session.resolve(&args.parent)?;
    let position = args
        .position
        .unwrap_or_else(|| session.manager().tree().child_count(parent));

    let id = session
        .manager_mut()
        .add_mod_folder(parent, position, &folder)
        .with_context(|| format!("failed to add {}", folder.display()))?;

    let node = session.manager().tree().node(id)?;
    let added = node.folder().to_path_buf();
    println!(
        "Added {} {} ({} subfolders)",
        session.describe(id),
        node.name(),
        node.child_count()
    );
    if let Some(picked_from) = added.parent() {
        session.remember_mod_folder(picked_from);
    }
    session.commit()
}

/// Main handler for remove command.
///
/// # Errors
///
/// Returns an error for the root or an invalid path, or if the mod list
/// cannot be saved.
pub fn run_remove_command(args: &NodeArgs, config: &Config, dry: bool) -> Result<()> {
    let mut session = Session::open(config, dry)?;
    let Some((parent_path, position)) = args.path.split_last() else {
        bail!("the root cannot be removed");
    };
    let id = session.resolve(&args.path)?;
    let parent = session.resolve(&parent_path)?;

    let node = session.manager().tree().node(id)?;
    let name = node.name().to_string();
    let removed = session
        .manager()
        .tree()
        .descendants(id)
        .count()
        .saturating_add(1);

    session.manager_mut().remove_rows(parent, position, 1)?;
    println!("Removed {} {name} ({removed} nodes)", args.path);
    session.commit()
}

/// Main handler for move command.
///
/// # Errors
///
/// Returns an error if a path is invalid, the destination lies inside a moved
/// node, or the mod list cannot be saved.
pub fn run_move_command(args: &MoveArgs, config: &Config, dry: bool) -> Result<()> {
    let mut session = Session::open(config, dry)?;
    let sources = args
        .paths
        .iter()
        .map(|path| session.resolve(path))
        .collect::<Result<Vec<_>>>()?;
    let dest = session.resolve(&args.to)?;
    let position = args
        .position
        .unwrap_or_else(|| session.manager().tree().child_count(dest));

    let moved = session
        .manager_mut()
        .move_rows(&sources, dest, position)
        .with_context(|| format!("failed to move to '{}'", args.to))?;
    debug!(moved = moved.len(), "moved nodes");

    for id in moved {
        let name = session.manager().tree().node(id)?.name().to_string();
        println!("Moved {name} -> {}", session.describe(id));
    }
    session.commit()
}

/// Main handler for enable and disable commands.
///
/// # Errors
///
/// Returns an error for the root or an invalid path, or if the mod list
/// cannot be saved.
pub fn run_toggle_command(args: &NodeArgs, enabled: bool, config: &Config, dry: bool) -> Result<()> {
    let mut session = Session::open(config, dry)?;
    let id = session.resolve(&args.path)?;
    session
        .manager_mut()
        .set_field(id, FieldValue::Enabled(enabled))?;

    let state = if enabled { "Enabled" } else { "Disabled" };
    let name = session.manager().tree().node(id)?.name().to_string();
    println!("{state} {} {name}", args.path);
    session.commit()
}

/// Main handler for rename command.
///
/// # Errors
///
/// Returns an error for the root or an invalid path, or if the mod list
/// cannot be saved.
pub fn run_rename_command(args: &RenameArgs, config: &Config, dry: bool) -> Result<()> {
    let mut session = Session::open(config, dry)?;
    let id = session.resolve(&args.path)?;

    if let Some(ref name) = args.name {
        session
            .manager_mut()
            .set_field(id, FieldValue::Name(name.clone()))?;
    }
    if let Some(ref folder) = args.folder {
        let folder = std::path::absolute(folder)
            .with_context(|| format!("failed to resolve {}", folder.display()))?;
        session
            .manager_mut()
            .set_field(id, FieldValue::Folder(folder))?;
    }

    let node = session.manager().tree().node(id)?;
    println!(
        "Updated {} {} ({})",
        args.path,
        node.name(),
        node.folder().display()
    );
    session.commit()
}

#[cfg(test)]
mod tests {
    use super::resolve_mod_folder;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_resolve_mod_folder() {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path();

        assert_eq!(
            resolve_mod_folder(Path::new("Better Bodies"), Some(base)),
            base.join("Better Bodies")
        );
        assert_eq!(
            resolve_mod_folder(Path::new("Better Bodies"), None),
            PathBuf::from("Better Bodies")
        );
        let absolute = base.join("abs");
        assert_eq!(resolve_mod_folder(&absolute, Some(Path::new("/other"))), absolute);
    }
}
