// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::global::{OverrideValue, parse_override};
use crate::cli::{Cli, Command};
use crate::model::NodePath;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["openmwmm", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "openmwmm",
        "-l",
        "4",
        "--mod-list",
        "/tmp/mods.json",
        "--dry",
        "list",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.mod_list, Some(PathBuf::from("/tmp/mods.json")));
    assert!(cli.global.dry);
    assert!(matches!(cli.command, Some(Command::List)));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["openmwmm", "-l", "6", "list"]).is_err());
}

#[test]
fn test_parse_add_defaults_to_root() {
    let cli = Cli::try_parse_from(["openmwmm", "add", "Better Bodies"]).unwrap();
    let Some(Command::Add(args)) = cli.command else {
        panic!("expected add command");
    };
    assert_eq!(args.folder, PathBuf::from("Better Bodies"));
    assert!(args.parent.is_root());
    assert_eq!(args.position, None);
}

#[test]
fn test_parse_move() {
    let cli = Cli::try_parse_from(["openmwmm", "move", "0", "2/1", "--to", "1", "-n", "0"]).unwrap();
    let Some(Command::Move(args)) = cli.command else {
        panic!("expected move command");
    };
    assert_eq!(
        args.paths,
        [NodePath::from(vec![0]), NodePath::from(vec![2, 1])]
    );
    assert_eq!(args.to, NodePath::from(vec![1]));
    assert_eq!(args.position, Some(0));
}

#[test]
fn test_parse_move_requires_destination() {
    assert!(Cli::try_parse_from(["openmwmm", "move", "0"]).is_err());
    assert!(Cli::try_parse_from(["openmwmm", "move", "--to", "root"]).is_err());
}

#[test]
fn test_parse_bad_node_path() {
    let err = Cli::try_parse_from(["openmwmm", "remove", "1/x"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn test_rename_requires_a_field() {
    assert!(Cli::try_parse_from(["openmwmm", "rename", "0"]).is_err());
    let cli = Cli::try_parse_from(["openmwmm", "rename", "0", "--name", "Core"]).unwrap();
    let Some(Command::Rename(args)) = cli.command else {
        panic!("expected rename command");
    };
    assert_eq!(args.name.as_deref(), Some("Core"));
    assert!(args.folder.is_none());
}

#[test]
fn test_config_overrides_order() {
    let cli = Cli::try_parse_from([
        "openmwmm",
        "--set",
        "global/log_level=1",
        "-l",
        "3",
        "-m",
        "mods.json",
        "list",
    ])
    .unwrap();
    let keys: Vec<String> = cli
        .global
        .to_config_overrides()
        .unwrap()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(
        keys,
        [
            "global.log_level",
            "global.log_level",
            "global.file_log_level",
            "paths.mod_list",
        ]
    );
}

#[test]
fn test_parse_override_values() {
    assert_eq!(
        parse_override("conflicts.reuse_index = true").unwrap(),
        (
            "conflicts.reuse_index".to_string(),
            OverrideValue::Scalar("true".to_string())
        )
    );
    assert_eq!(
        parse_override("conflicts.ignore=docs/**, *.txt,").unwrap().1,
        OverrideValue::List(vec!["docs/**".to_string(), "*.txt".to_string()])
    );

    let err = parse_override("paths.mod_list").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for '--set' in section '[cli]': expected KEY=VALUE: 'paths.mod_list'"
    );
    assert!(parse_override("=value").is_err());
}
