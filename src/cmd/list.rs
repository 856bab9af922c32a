// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for openmwmm.
//!
//! ```text
//! 0    [x] Better Bodies  /mods/Better Bodies
//! 0/0  [x]   Core         /mods/Better Bodies/00 Core
//! 1    [ ] Patch          /mods/Patch
//! ```

use crate::cmd::session::Session;
use crate::config::Config;
use crate::error::Result;
use crate::model::ModTree;

/// Renders every node in load order, one line each.
#[must_use]
pub fn render_tree(tree: &ModTree) -> Vec<String> {
    let rows: Vec<(String, bool, String, String)> = tree
        .depth_first()
        .filter_map(|(id, depth)| {
            let node = tree.get(id)?;
            let path = tree.path_of(id).ok()?.to_string();
            let label = format!("{}{}", "  ".repeat(depth), node.name());
            Some((path, node.enabled(), label, node.folder().display().to_string()))
        })
        .collect();

    let path_width = rows.iter().map(|(path, ..)| path.len()).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|(_, _, label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    rows.into_iter()
        .map(|(path, enabled, label, folder)| {
            let mark = if enabled { 'x' } else { ' ' };
            format!("{path:<path_width$} [{mark}] {label:<label_width$}  {folder}")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the mod list cannot be loaded.
pub fn run_list_command(config: &Config) -> Result<()> {
    let session = Session::open(config, true)?;
    let lines = render_tree(session.manager().tree());
    if lines.is_empty() {
        println!("No mods in {}", config.paths.mod_list.display());
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}
