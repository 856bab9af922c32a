// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and command output.
//!
//! Tests the CLI module with realistic command-line argument patterns and the
//! text the handlers print.

use clap::Parser;
use openmwmm::cli::global::{GlobalOptions, OverrideValue};
use openmwmm::cli::{Cli, Command};
use openmwmm::cmd::conflicts::conflict_report;
use openmwmm::cmd::list::render_tree;
use openmwmm::manager::ModManager;
use openmwmm::model::{ModEntry, ModTree, NodePath};
use openmwmm::persist::{JsonModList, ModListStore};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["openmwmm", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["openmwmm", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["openmwmm"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_repeated_config_and_set() {
    let cli = Cli::try_parse_from([
        "openmwmm",
        "--config",
        "a.toml",
        "-c",
        "b.toml",
        "--set",
        "conflicts.ignore=docs/**",
        "-s",
        "paths/openmw_cfg=/tmp/openmw.cfg",
        "options",
    ])
    .unwrap();

    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(
        cli.global.to_config_overrides().unwrap(),
        [
            (
                "conflicts.ignore".to_string(),
                OverrideValue::List(vec!["docs/**".to_string()])
            ),
            (
                "paths.openmw_cfg".to_string(),
                OverrideValue::Scalar("/tmp/openmw.cfg".to_string())
            ),
        ]
    );
}

#[test]
fn cli_file_log_level_falls_back_to_log_level() {
    let global = GlobalOptions {
        log_level: Some(5),
        log_file: Some(PathBuf::from("run.log")),
        ..GlobalOptions::default()
    };
    let overrides = global.to_config_overrides().unwrap();
    assert!(overrides.contains(&(
        "global.file_log_level".to_string(),
        OverrideValue::Scalar("5".to_string())
    )));
    assert!(overrides.contains(&(
        "global.log_file".to_string(),
        OverrideValue::Scalar("run.log".to_string())
    )));
}

#[test]
fn cli_set_without_equals_is_an_error() {
    let cli = Cli::try_parse_from(["openmwmm", "--set", "global.log_level", "list"]).unwrap();
    assert!(cli.global.to_config_overrides().is_err());
}

// =============================================================================
// Mod Commands
// =============================================================================

#[test]
fn cli_enable_disable_paths() {
    let cli = Cli::try_parse_from(["openmwmm", "disable", "2/0/1"]).unwrap();
    let Some(Command::Disable(args)) = cli.command else {
        panic!("expected disable command");
    };
    assert_eq!(args.path, NodePath::from(vec![2, 0, 1]));
    assert_eq!(args.path.to_string(), "2/0/1");
}

#[test]
fn cli_conflicts_files_flag() {
    let cli = Cli::try_parse_from(["openmwmm", "conflicts", "0", "--files"]).unwrap();
    let Some(Command::Conflicts(args)) = cli.command else {
        panic!("expected conflicts command");
    };
    assert!(args.files);
    assert_eq!(args.path, NodePath::from(vec![0]));
}

#[test]
fn cli_export_config_file() {
    let cli = Cli::try_parse_from(["openmwmm", "--dry", "export", "--config-file", "o.cfg"]).unwrap();
    let Some(Command::Export(args)) = cli.command else {
        panic!("expected export command");
    };
    assert_eq!(args.config_file, Some(PathBuf::from("o.cfg")));
    assert!(cli.global.dry);
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["openmwmm", "build"]).is_err());
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn list_renders_paths_marks_and_folders() {
    let tree = ModTree::from_entries(&[
        ModEntry::new("Better Bodies", "/mods/bb", true).with_mods(vec![
            ModEntry::new("Core", "/mods/bb/00 Core", true),
            ModEntry::new("Extras", "/mods/bb/01 Extras", false),
        ]),
        ModEntry::new("Patch", "/mods/patch", false),
    ])
    .unwrap();

    insta::assert_snapshot!(render_tree(&tree).join("\n"), @r"
    0   [x] Better Bodies  /mods/bb
    0/0 [x]   Core         /mods/bb/00 Core
    0/1 [ ]   Extras       /mods/bb/01 Extras
    1   [ ] Patch          /mods/patch
    ");
}

#[test]
fn list_of_empty_tree() {
    assert!(render_tree(&ModTree::new()).is_empty());
}

#[test]
fn conflicts_report_with_shared_files() {
    let temp = tempfile::tempdir().unwrap();
    let make = |name: &str, files: &[&str]| {
        let root = temp.path().join(name);
        for file in files {
            let path = root.join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "").unwrap();
        }
        root
    };
    let a = make("a", &["textures/x.dds", "meshes/y.nif", "a.esp"]);
    let b = make("b", &["textures/x.dds", "meshes/y.nif"]);
    let c = make("c", &["c.esp"]);

    let mut store = JsonModList::open(temp.path().join("mods.json")).unwrap();
    store
        .save(&[
            ModEntry::new("A", &a, true),
            ModEntry::new("B", &b, true),
            ModEntry::new("C", &c, true),
        ])
        .unwrap();
    let mut manager = ModManager::default();
    manager.load(&store).unwrap();
    let selected = manager.tree().child(manager.tree().root(), 0).unwrap();

    let lines = conflict_report(&mut manager, selected, true).unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("1 B ({})", b.display()));
    assert_eq!(lines[1], "    meshes/y.nif");
    assert_eq!(lines[2], "    textures/x.dds");

    let lines = conflict_report(&mut manager, selected, false).unwrap();
    assert_eq!(lines, [format!("1 B ({})", b.display())]);
}
