// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-command overlay: variables describing the command being launched.
//!
//! ```text
//! runner = None             → {}
//! runner = AppShell         → PACKAGE_NAME SHELL_ID SHELL_NAME
//!                             APP_SHELL_NUMBER_SINCE_{BOOT,APP_START}
//! runner = TerminalSession  → PACKAGE_NAME SHELL_ID SHELL_NAME
//!                             TERMINAL_SESSION_NUMBER_SINCE_{BOOT,APP_START}
//! (all under SHELL_CMD__, each only if set)
//! ```

use crate::core::env::Env;
use crate::core::env::names::{
    ENV_SHELL_CMD_APP_SHELL_NUMBER_SINCE_APP_START, ENV_SHELL_CMD_APP_SHELL_NUMBER_SINCE_BOOT,
    ENV_SHELL_CMD_PACKAGE_NAME, ENV_SHELL_CMD_SHELL_ID, ENV_SHELL_CMD_SHELL_NAME,
    ENV_SHELL_CMD_TERMINAL_SESSION_NUMBER_SINCE_APP_START,
    ENV_SHELL_CMD_TERMINAL_SESSION_NUMBER_SINCE_BOOT,
};

use super::context::PackageContext;
use super::request::{ExecutionRequest, Runner};

/// Supplies variables that are merged over the base environment.
///
/// Values returned here overwrite same-named base variables.
pub trait ShellCommandOverlay: Send + Sync + std::fmt::Debug {
    fn environment(&self, context: &PackageContext, request: &ExecutionRequest) -> Env;
}

/// A fixed set of variables.
impl ShellCommandOverlay for Env {
    fn environment(&self, _context: &PackageContext, _request: &ExecutionRequest) -> Env {
        self.clone()
    }
}

/// Exposes the command's identity under the `SHELL_CMD__` scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandShellEnvironment;

impl ShellCommandOverlay for ShellCommandShellEnvironment {
    fn environment(&self, context: &PackageContext, request: &ExecutionRequest) -> Env {
        let mut env = Env::new();
        let Some(runner) = request.runner else {
            return env;
        };

        env.put_if_set(ENV_SHELL_CMD_PACKAGE_NAME, context.package_name());
        env.put_if_set(ENV_SHELL_CMD_SHELL_ID, request.id.map(|id| id.to_string()));
        env.put_if_set(ENV_SHELL_CMD_SHELL_NAME, request.shell_name.as_deref());

        let (since_boot, since_app_start) = match runner {
            Runner::AppShell => (
                ENV_SHELL_CMD_APP_SHELL_NUMBER_SINCE_BOOT,
                ENV_SHELL_CMD_APP_SHELL_NUMBER_SINCE_APP_START,
            ),
            Runner::TerminalSession => (
                ENV_SHELL_CMD_TERMINAL_SESSION_NUMBER_SINCE_BOOT,
                ENV_SHELL_CMD_TERMINAL_SESSION_NUMBER_SINCE_APP_START,
            ),
        };
        env.put_if_set(since_boot, request.number_since_boot.map(|n| n.to_string()));
        env.put_if_set(
            since_app_start,
            request.number_since_app_start.map(|n| n.to_string()),
        );

        env
    }
}
