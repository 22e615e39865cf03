// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Execution request consumed by the environment builder.
//!
//! ```text
//! ExecutionRequest (bon builder)
//!   working_directory  → PWD (absolutised) or platform default
//!   is_failsafe        → passed to the platform, unused by built-ins
//!   set_shell_command_shell_environment → enables the overlay
//!   id/shell_name/runner/number_since_* → read by the overlay only
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of runner that will execute the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Runner {
    /// Background app shell with no terminal attached.
    AppShell,
    /// Interactive terminal session.
    TerminalSession,
}

impl std::fmt::Display for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AppShell => write!(f, "app-shell"),
            Self::TerminalSession => write!(f, "terminal-session"),
        }
    }
}

/// A request to launch a shell command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct ExecutionRequest {
    /// Identifier of the command, unique within the app.
    pub id: Option<u32>,
    /// Human-readable name of the shell.
    #[builder(into)]
    pub shell_name: Option<String>,
    pub runner: Option<Runner>,
    /// Number of shells of this runner kind started since device boot.
    pub number_since_boot: Option<u32>,
    /// Number of shells of this runner kind started since app start.
    pub number_since_app_start: Option<u32>,
    /// Working directory, relative paths resolve against the process cwd.
    #[builder(into)]
    pub working_directory: Option<PathBuf>,
    #[builder(default)]
    pub is_failsafe: bool,
    #[builder(default)]
    pub set_shell_command_shell_environment: bool,
}

impl ExecutionRequest {
    /// Returns the working directory if one was given and it is not empty.
    #[must_use]
    pub fn working_directory(&self) -> Option<&std::path::Path> {
        self.working_directory
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
