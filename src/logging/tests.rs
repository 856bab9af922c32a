// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::new(5).unwrap(), LogLevel::TRACE);
    assert!(LogLevel::from_u8(6).is_none());
    let err = LogLevel::new(9).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 9"
    );
}

#[test]
fn test_log_level_conversion() {
    let levels: Vec<(u8, &str, Option<Level>)> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(|level| {
            (
                level.as_u8(),
                level.to_filter_string(),
                level.to_tracing_level(),
            )
        })
        .collect();
    assert_eq!(
        levels,
        [
            (0, "off", None),
            (1, "error", Some(Level::ERROR)),
            (2, "warn", Some(Level::WARN)),
            (3, "info", Some(Level::INFO)),
            (4, "debug", Some(Level::DEBUG)),
            (5, "trace", Some(Level::TRACE)),
        ]
    );
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&LogLevel::WARN).unwrap(), "2");
    assert!(serde_json::from_str::<LogLevel>("7").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert!(config.log_file().is_none());
    assert!(!config.json_file());

    let config = LogConfig::builder()
        .with_log_file("openmwmm.log".to_string())
        .with_json_file(true)
        .build();
    assert_eq!(config.log_file(), Some("openmwmm.log"));
    assert!(config.json_file());
}
