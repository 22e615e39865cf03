// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::env::{OutputFormat, PlatformArg};
use crate::cli::global::parse_override;
use crate::cli::{Cli, Command};
use crate::platform::PlatformKind;
use crate::shell::Runner;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["shellenv", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_env_defaults() {
    let cli = Cli::try_parse_from(["shellenv", "env"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };

    assert_eq!(args.format, OutputFormat::Environ);
    assert_eq!(args.platform.kind(), None);

    let request = args.to_request();
    assert_eq!(request.working_directory, None);
    assert!(!request.is_failsafe);
    assert!(!request.set_shell_command_shell_environment);
    assert_eq!(request.runner, None);
}

#[test]
fn test_parse_env_full_request() {
    let cli = Cli::try_parse_from([
        "shellenv",
        "env",
        "--cwd",
        "work",
        "--failsafe",
        "-s",
        "--id",
        "12",
        "--shell-name",
        "bootstrap",
        "--runner",
        "terminal-session",
        "--number-since-boot",
        "4",
        "--platform",
        "unix",
        "--format",
        "json",
    ])
    .unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };

    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.platform.platform, Some(PlatformArg::Unix));
    assert_eq!(args.platform.kind(), Some(PlatformKind::Unix));

    let request = args.to_request();
    assert_eq!(request.working_directory, Some(PathBuf::from("work")));
    assert!(request.is_failsafe);
    assert!(request.set_shell_command_shell_environment);
    assert_eq!(request.id, Some(12));
    assert_eq!(request.shell_name.as_deref(), Some("bootstrap"));
    assert_eq!(request.runner, Some(Runner::TerminalSession));
    assert_eq!(request.number_since_boot, Some(4));
    assert_eq!(request.number_since_app_start, None);
}

#[test]
fn test_parse_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["shellenv", "paths", "-l", "5", "--ini", "a.toml"]).unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.inis, vec![PathBuf::from("a.toml")]);
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![
            "global/output_log_level=5".to_string(),
            "global/file_log_level=5".to_string(),
        ]
    );
}

#[test]
fn test_rejects_out_of_range_log_level() {
    assert!(Cli::try_parse_from(["shellenv", "-l", "7", "version"]).is_err());
}

#[test]
fn test_rejects_unknown_runner() {
    assert!(Cli::try_parse_from(["shellenv", "env", "--runner", "daemon"]).is_err());
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("environment/sdk_version=34"),
        Some(("environment.sdk_version".to_string(), "34"))
    );
    assert_eq!(
        parse_override("environment.platform=unix"),
        Some(("environment.platform".to_string(), "unix"))
    );
    assert_eq!(parse_override("novalue"), None);
    assert_eq!(parse_override("=x"), None);
}
