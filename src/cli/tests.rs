// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::render::ColorChoice;
use clap::Parser;

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["randwiki"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.to_config_overrides().is_empty());
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["randwiki", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_fetch_args() {
    let cli = Cli::try_parse_from([
        "randwiki",
        "fetch",
        "--url",
        "http://localhost:8080/summary",
        "-w",
        "60",
        "--color",
        "never",
    ])
    .unwrap();

    let Some(Command::Fetch(args)) = &cli.command else {
        panic!("expected fetch command, got {:?}", cli.command);
    };
    assert_eq!(args.url.as_deref(), Some("http://localhost:8080/summary"));
    assert_eq!(args.width, Some(60));
    assert_eq!(args.color, Some(ColorChoice::Never));
}

#[test]
fn test_parse_rejects_unknown_color() {
    assert!(Cli::try_parse_from(["randwiki", "fetch", "--color", "rainbow"]).is_err());
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["randwiki", "-l", "7"]).is_err());
}

#[test]
fn test_config_overrides_order() {
    let cli = Cli::try_parse_from([
        "randwiki",
        "-s",
        "render/width=10",
        "-l",
        "4",
        "--log-file",
        "out.log",
        "fetch",
        "-w",
        "80",
        "-A",
        "agent/1.0",
    ])
    .unwrap();

    insta::assert_snapshot!(cli.to_config_overrides().join("\n"), @r"
    render/width=10
    global/output_log_level=4
    global/file_log_level=4
    global/log_file=out.log
    fetch/user_agent=agent/1.0
    render/width=80
    ");
}

#[test]
fn test_file_log_level_overrides_log_level() {
    let cli = Cli::try_parse_from(["randwiki", "-l", "2", "--file-log-level", "5"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        vec!["global/output_log_level=2", "global/file_log_level=5"]
    );
}
