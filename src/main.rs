// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Options | List | Add | Remove | Move | Enable | Disable | Rename
//!   Conflicts | Export
//! ```

use std::process::ExitCode;

use openmwmm::cli::global::{GlobalOptions, OverrideValue};
use openmwmm::cli::{self, Command};
use openmwmm::cmd::config::run_options_command;
use openmwmm::cmd::conflicts::run_conflicts_command;
use openmwmm::cmd::edit::{
    run_add_command, run_move_command, run_remove_command, run_rename_command, run_toggle_command,
};
use openmwmm::cmd::export::run_export_command;
use openmwmm::cmd::list::run_list_command;
use openmwmm::config::Config;
use openmwmm::config::loader::ConfigLoader;
use openmwmm::logging::init_logging;
use openmwmm::logging::LogConfig;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_CONFIG_FILE: &str = "openmwmm.toml";
const ENV_PREFIX: &str = "OPENMWMM";

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (config, config_files) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let dry = cli.global.dry;
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config, config_files);
            Ok(())
        }
        Some(Command::List) => run_list_command(config),
        Some(Command::Add(args)) => run_add_command(args, config, dry),
        Some(Command::Remove(args)) => run_remove_command(args, config, dry),
        Some(Command::Move(args)) => run_move_command(args, config, dry),
        Some(Command::Enable(args)) => run_toggle_command(args, true, config, dry),
        Some(Command::Disable(args)) => run_toggle_command(args, false, config, dry),
        Some(Command::Rename(args)) => run_rename_command(args, config, dry),
        Some(Command::Conflicts(args)) => run_conflicts_command(args, config),
        Some(Command::Export(args)) => run_export_command(args, config, dry),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> openmwmm::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    for (key, value) in global.to_config_overrides()? {
        loader = match value {
            OverrideValue::Scalar(value) => loader.set(&key, value)?,
            OverrideValue::List(values) => loader.set(&key, values)?,
        };
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> openmwmm::error::Result<(Config, Vec<String>)> {
    let loader = build_config_loader(global)?;
    let files = loader.format_loaded_files();
    let config = loader.build()?;
    Ok((config, files))
}
