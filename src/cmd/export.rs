// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export command implementation for openmwmm.
//!
//! ```text
//! mods.json --> ModManager::export_data --> OpenMwConfig (data=...) --> openmw.cfg
//!                                                     \-- --dry: print rendered file
//! ```

use anyhow::Context;
use tracing::info;

use crate::cli::mods::ExportArgs;
use crate::cmd::session::Session;
use crate::config::Config;
use crate::error::Result;
use crate::persist::{GameConfigStore, OpenMwConfig};

/// Main handler for export command.
///
/// # Errors
///
/// Returns an error if either file cannot be read or the game config cannot
/// be written.
pub fn run_export_command(args: &ExportArgs, config: &Config, dry: bool) -> Result<()> {
    let session = Session::open(config, dry)?;
    let path = args
        .config_file
        .as_ref()
        .unwrap_or(&config.paths.openmw_cfg);

    let mut game_config = OpenMwConfig::open(path)
        .with_context(|| format!("failed to open game config {}", path.display()))?;
    let exported = session.manager().export_data(&mut game_config);

    if session.dry() {
        print!("{}", game_config.render());
        return Ok(());
    }

    game_config
        .save()
        .with_context(|| format!("failed to write game config {}", path.display()))?;
    info!(path = %path.display(), folders = exported.len(), "wrote game config");
    println!("Exported {} data folders to {}", exported.len(), path.display());
    Ok(())
}
