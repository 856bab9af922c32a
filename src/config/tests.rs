// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, SourceKind};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.log_level, LogLevel::WARN);
    assert_eq!(config.global.file_log_level, LogLevel::DEBUG);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.paths.mod_list, PathBuf::from("mods.json"));
    assert_eq!(config.paths.openmw_cfg, PathBuf::from("openmw.cfg"));
    assert!(config.conflicts.case_sensitive);
    assert!(!config.conflicts.reuse_index);
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[global]
log_level = 4
log_file = "logs/openmwmm.log"

[paths]
mod_list = "/home/user/.config/openmw/mods.json"
default_mod_folder = "/games/mods"

[conflicts]
case_sensitive = false
reuse_index = true
ignore = ["docs/**", "*.txt"]
"#,
    )
    .unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/openmwmm.log"))
    );
    assert_eq!(
        config.paths.mod_list,
        PathBuf::from("/home/user/.config/openmw/mods.json")
    );
    assert_eq!(config.paths.openmw_cfg, PathBuf::from("openmw.cfg"));
    assert_eq!(
        config.paths.default_mod_folder,
        Some(PathBuf::from("/games/mods"))
    );

    let options = config.conflicts.scan_options();
    assert!(!options.case_sensitive());
    assert!(options.reuse_index());
    assert_eq!(options.ignore(), ["docs/**", "*.txt"]);
}

#[test]
fn test_unknown_keys_rejected() {
    assert!(Config::parse("[global]\ndry_run = true\n").is_err());
    assert!(Config::parse("[tasks]\nname = 1\n").is_err());
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Config::parse("[global]\nlog_level = 6\n").is_err());
}

#[test]
fn test_override_wins_over_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[paths]\nmod_list = \"from-file.json\"\n")
        .set("paths.mod_list", "from-cli.json")
        .unwrap()
        .set("conflicts.include_hidden", true)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.paths.mod_list, PathBuf::from("from-cli.json"));
    assert!(config.conflicts.include_hidden);
}

#[test]
fn test_later_sources_override_earlier() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\nlog_level = 1\nfile_log_level = 2\n")
        .add_toml_str("[global]\nlog_level = 5\n")
        .build()
        .unwrap();
    assert_eq!(config.global.log_level, LogLevel::TRACE);
    assert_eq!(config.global.file_log_level, LogLevel::WARN);
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[global]
log_file = "openmwmm.log"

[paths]
default_mod_folder = "/games/mods"

[conflicts]
ignore = ["docs/**", "*.txt"]
"#,
    )
    .unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    conflicts.case_sensitive = true
    conflicts.follow_links   = false
    conflicts.ignore         = docs/**, *.txt
    conflicts.include_hidden = false
    conflicts.reuse_index    = false
    global.file_log_level    = 4
    global.log_file          = openmwmm.log
    global.log_level         = 2
    paths.default_mod_folder = /games/mods
    paths.mod_list           = mods.json
    paths.openmw_cfg         = openmw.cfg
    ");
}

#[test]
fn test_loaded_files_listing() {
    let temp = tempfile::tempdir().unwrap();
    let present = temp.path().join("present.toml");
    std::fs::write(&present, "").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(temp.path().join("absent.toml"))
        .add_toml_file(&present)
        .add_toml_str("");

    let listed = loader.loaded_files();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], (SourceKind::Required, present.clone()));
    assert_eq!(listed[1].0, SourceKind::Inline);
    assert_eq!(loader.format_loaded_files()[1], "2. [string] <string>");
    assert!(loader.build().is_ok());
}
