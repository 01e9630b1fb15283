// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_range() {
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::try_from(4).ok(), Some(LogLevel::DEBUG));
    assert!(LogLevel::try_from(42).is_err());
    assert_eq!(u8::from(LogLevel::DUMP), 6);
    assert_eq!(LogLevel::try_from(0).ok(), Some(LogLevel::SILENT));
}

#[test]
fn test_log_level_out_of_range_message() {
    let err = LogLevel::new(9).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 9"
    );
}

#[test]
fn test_level_names() {
    assert_eq!(LogLevel::SILENT.name(), "off");
    assert_eq!(LogLevel::ERROR.name(), "error");
    assert_eq!(LogLevel::INFO.name(), "info");
    assert_eq!(LogLevel::DUMP.name(), "trace");
}

#[test]
fn test_directives_cap_http_stack_between_info_and_trace() {
    assert_eq!(LogLevel::SILENT.directives(), "off");
    assert_eq!(LogLevel::WARN.directives(), "warn");
    insta::assert_snapshot!(
        LogLevel::INFO.directives(),
        @"info,hyper=warn,hyper_util=warn,h2=warn,reqwest=warn"
    );
    assert!(LogLevel::TRACE.directives().starts_with("trace,hyper=warn"));
    assert_eq!(LogLevel::DUMP.directives(), "trace");
}

#[test]
fn test_levels_are_ordered() {
    assert!(LogLevel::SILENT < LogLevel::ERROR);
    assert!(LogLevel::TRACE < LogLevel::DUMP);
}

#[test]
fn test_log_level_serde_roundtrip() {
    let level: LogLevel = serde_json::from_str("5").unwrap();
    assert_eq!(level, LogLevel::TRACE);
    assert_eq!(serde_json::to_string(&level).unwrap(), "5");
    assert!(serde_json::from_str::<LogLevel>("7").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(config.console_ansi());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::SILENT)
        .with_log_file("logs/randwiki.log")
        .with_console_ansi(false)
        .build();
    assert_eq!(config.console_level(), LogLevel::SILENT);
    assert_eq!(
        config.log_file(),
        Some(std::path::Path::new("logs/randwiki.log"))
    );
    assert!(!config.console_ansi());
}

#[test]
fn test_create_log_file_makes_parent_dirs() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested/dir/randwiki.log");

    super::create_log_file(&path).unwrap();
    assert!(path.is_file());
}
