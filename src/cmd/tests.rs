// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::env::{EnvArgs, OutputFormat, PathsArgs, PlatformArg, PlatformOverride, RunnerArg};
use crate::cmd::env::{build_environment, render_environment};
use crate::cmd::paths::format_paths;
use crate::config::Config;
use crate::core::env::Env;
use crate::core::env::names::SHELL_CMD_ENV_SCOPE;
use crate::platform::PlatformKind;
use tempfile::TempDir;

fn sample_env() -> Env {
    let mut env = Env::new();
    env.set("HOME", "/").set("GREETING", "say \"hi\"");
    env
}

fn android_config(package: &str) -> Config {
    Config::parse(&format!(
        "[environment]\nplatform = \"android\"\npackage_name = \"{package}\"\n"
    ))
    .unwrap()
}

#[test]
fn test_render_environ() {
    let rendered = render_environment(&sample_env(), OutputFormat::Environ).unwrap();
    insta::assert_snapshot!(rendered, @r#"
    GREETING=say "hi"
    HOME=/
    "#);
}

#[test]
fn test_render_empty_environ() {
    let rendered = render_environment(&Env::new(), OutputFormat::Environ).unwrap();
    assert_eq!(rendered, "");
}

#[test]
fn test_render_dotenv() {
    let rendered = render_environment(&sample_env(), OutputFormat::Dotenv).unwrap();
    insta::assert_snapshot!(rendered, @r#"
    export GREETING="say \"hi\""
    export HOME="/"
    "#);
}

#[test]
fn test_render_json() {
    let rendered = render_environment(&sample_env(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["HOME"], "/");
    assert_eq!(value["GREETING"], "say \"hi\"");
    assert!(rendered.ends_with('\n'));
}

#[test]
fn test_build_environment_with_overlay() {
    let config = android_config("com.example.app");
    let args = EnvArgs {
        shell_command_env: true,
        id: Some(3),
        shell_name: Some("bootstrap".to_string()),
        runner: Some(RunnerArg::AppShell),
        number_since_boot: Some(9),
        ..EnvArgs::default()
    };

    let env = build_environment(&args, &config).unwrap();

    assert_eq!(env.get("PWD"), Some("/"));
    assert_eq!(env.get("HOME"), Some("/"));
    assert_eq!(env.get("SHELL_CMD__PACKAGE_NAME"), Some("com.example.app"));
    assert_eq!(env.get("SHELL_CMD__SHELL_ID"), Some("3"));
    assert_eq!(env.get("SHELL_CMD__SHELL_NAME"), Some("bootstrap"));
    assert_eq!(
        env.get("SHELL_CMD__APP_SHELL_NUMBER_SINCE_BOOT"),
        Some("9")
    );
    assert!(!env.contains("SHELL_CMD__APP_SHELL_NUMBER_SINCE_APP_START"));
}

#[test]
fn test_build_environment_overlay_disabled_in_config() {
    let config = Config::parse(
        "[environment]\npackage_name = \"com.example.app\"\nshell_command_overlay = false\n",
    )
    .unwrap();
    let args = EnvArgs {
        shell_command_env: true,
        runner: Some(RunnerArg::TerminalSession),
        ..EnvArgs::default()
    };

    let env = build_environment(&args, &config).unwrap();
    assert!(env.iter().all(|(key, _)| !key.starts_with(SHELL_CMD_ENV_SCOPE)));
}

#[test]
fn test_build_environment_platform_override_and_cwd() {
    let temp = TempDir::new().unwrap();
    let config = android_config("com.example.app");
    let args = EnvArgs {
        working_directory: Some(temp.path().to_path_buf()),
        platform: PlatformOverride {
            platform: Some(PlatformArg::Unix),
        },
        ..EnvArgs::default()
    };

    let env = build_environment(&args, &config).unwrap();

    assert_eq!(env.get("PWD"), Some(temp.path().to_str().unwrap()));
    assert_eq!(env.get("TERM"), Some("xterm-256color"));
    assert_ne!(env.get("TMPDIR"), Some("/data/local/tmp"));
}

#[test]
fn test_format_paths() {
    let config = Config::default();
    assert_eq!(config.environment.platform, PlatformKind::Android);

    let android = format_paths(&PathsArgs::default(), &config);
    insta::assert_snapshot!(android.join("\n"), @r"
    working_directory = /
    bin_path          = /system/bin
    ");

    let unix = format_paths(
        &PathsArgs {
            platform: PlatformOverride {
                platform: Some(PlatformArg::Unix),
            },
        },
        &config,
    );
    insta::assert_snapshot!(unix.join("\n"), @r"
    working_directory = /
    bin_path          = /usr/bin
    ");
}
