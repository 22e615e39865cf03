// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `env` and `paths` commands.
//!
//! ```text
//! shellenv env [--cwd DIR] [--failsafe] [--shell-command-env]
//!              [--id N] [--shell-name NAME] [--runner KIND]
//!              [--number-since-boot N] [--number-since-app-start N]
//!              [--platform android|unix] [--format environ|dotenv|json]
//! shellenv paths [--platform android|unix]
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::platform::PlatformKind;
use crate::shell::{ExecutionRequest, Runner};

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Working directory for the command; relative paths resolve against the
    /// current directory.
    #[arg(short = 'C', long = "cwd", value_name = "DIR")]
    pub working_directory: Option<PathBuf>,

    /// Marks the command as launched in failsafe mode.
    #[arg(long)]
    pub failsafe: bool,

    /// Applies the SHELL_CMD__ overlay describing the command.
    #[arg(short = 's', long = "shell-command-env")]
    pub shell_command_env: bool,

    /// Command identifier exported as SHELL_CMD__SHELL_ID.
    #[arg(long, value_name = "N")]
    pub id: Option<u32>,

    /// Shell name exported as SHELL_CMD__SHELL_NAME.
    #[arg(long = "shell-name", value_name = "NAME")]
    pub shell_name: Option<String>,

    /// Runner kind; the overlay is empty without one.
    #[arg(long, value_enum)]
    pub runner: Option<RunnerArg>,

    /// Shell count for the runner since device boot.
    #[arg(long = "number-since-boot", value_name = "N")]
    pub number_since_boot: Option<u32>,

    /// Shell count for the runner since app start.
    #[arg(long = "number-since-app-start", value_name = "N")]
    pub number_since_app_start: Option<u32>,

    /// Overrides environment.platform from the configuration.
    #[command(flatten)]
    pub platform: PlatformOverride,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Environ)]
    pub format: OutputFormat,
}

impl EnvArgs {
    /// Converts the arguments into an execution request.
    #[must_use]
    pub fn to_request(&self) -> ExecutionRequest {
        ExecutionRequest::builder()
            .maybe_id(self.id)
            .maybe_shell_name(self.shell_name.clone())
            .maybe_runner(self.runner.map(Runner::from))
            .maybe_number_since_boot(self.number_since_boot)
            .maybe_number_since_app_start(self.number_since_app_start)
            .maybe_working_directory(self.working_directory.clone())
            .is_failsafe(self.failsafe)
            .set_shell_command_shell_environment(self.shell_command_env)
            .build()
    }
}

/// Arguments for the `paths` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PathsArgs {
    #[command(flatten)]
    pub platform: PlatformOverride,
}

/// `--platform` option shared by `env` and `paths`.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct PlatformOverride {
    /// Platform base environment to use instead of the configured one.
    #[arg(short = 'p', long = "platform", value_enum)]
    pub platform: Option<PlatformArg>,
}

impl PlatformOverride {
    /// Returns the override, if any, as a [`PlatformKind`].
    #[must_use]
    pub fn kind(&self) -> Option<PlatformKind> {
        self.platform.map(PlatformKind::from)
    }
}

/// Platform selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    /// Android system environment.
    Android,
    /// Generic Unix host.
    Unix,
}

impl From<PlatformArg> for PlatformKind {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Android => Self::Android,
            PlatformArg::Unix => Self::Unix,
        }
    }
}

/// Runner selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunnerArg {
    /// Background app shell.
    AppShell,
    /// Interactive terminal session.
    TerminalSession,
}

impl From<RunnerArg> for Runner {
    fn from(arg: RunnerArg) -> Self {
        match arg {
            RunnerArg::AppShell => Self::AppShell,
            RunnerArg::TerminalSession => Self::TerminalSession,
        }
    }
}

/// How the environment is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `NAME=value` per line.
    #[default]
    Environ,
    /// `export NAME="value"` lines suitable for `source`.
    Dotenv,
    /// A JSON object.
    Json,
}
