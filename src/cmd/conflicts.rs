// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conflicts command implementation for openmwmm.

use anyhow::Context;

use crate::cli::mods::ConflictsArgs;
use crate::cmd::session::Session;
use crate::config::Config;
use crate::conflict::{ConflictIndex, Selection};
use crate::error::Result;
use crate::manager::ModManager;
use crate::model::NodeId;

/// Selects `id` and describes every node flagged against it.
///
/// With `files`, each flagged mod is followed by the relative paths it
/// shares with the selected mod.
///
/// # Errors
///
/// Returns an error if the node has no folder or a mod folder cannot be
/// scanned.
pub fn conflict_report(manager: &mut ModManager, id: NodeId, files: bool) -> Result<Vec<String>> {
    manager
        .update_conflict_selection(&Selection::row(id))
        .context("conflict scan failed")?;

    let tree = manager.tree();
    let flagged: Vec<NodeId> = tree
        .depth_first()
        .map(|(node, _)| node)
        .filter(|node| manager.is_conflicting(*node))
        .collect();

    let selected_folder = tree.node(id)?.folder().to_path_buf();
    let index = if files {
        let folders = std::iter::once(selected_folder.as_path()).chain(
            flagged
                .iter()
                .filter_map(|node| tree.get(*node))
                .filter(|node| !node.is_group())
                .map(crate::model::ModNode::folder),
        );
        Some(ConflictIndex::build(folders, manager.selector().options())?)
    } else {
        None
    };

    let mut lines = Vec::new();
    for node_id in flagged {
        let node = tree.node(node_id)?;
        let path = tree.path_of(node_id)?;
        lines.push(format!(
            "{path} {} ({})",
            node.name(),
            node.folder().display()
        ));
        if let Some(ref index) = index {
            lines.extend(
                index
                    .shared_paths(&selected_folder, node.folder())
                    .into_iter()
                    .map(|relative| format!("    {relative}")),
            );
        }
    }
    Ok(lines)
}

/// Main handler for conflicts command.
///
/// # Errors
///
/// Returns an error if the path is invalid or the scan fails.
pub fn run_conflicts_command(args: &ConflictsArgs, config: &Config) -> Result<()> {
    let mut session = Session::open(config, true)?;
    let id = session.resolve(&args.path)?;
    let lines = conflict_report(session.manager_mut(), id, args.files)?;

    if lines.is_empty() {
        println!("No conflicts for {}", args.path);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}
