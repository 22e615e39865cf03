// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis), env, paths
//! ```

pub mod config;
pub mod env;
pub mod paths;

#[cfg(test)]
mod tests;

use crate::cli::env::PlatformOverride;
use crate::config::Config;
use std::borrow::Cow;

/// Returns `config` with `--platform` applied, borrowing when there is none.
fn with_platform_override<'a>(config: &'a Config, platform: &PlatformOverride) -> Cow<'a, Config> {
    match platform.kind() {
        Some(kind) if kind != config.environment.platform => {
            let mut config = config.clone();
            config.environment.platform = kind;
            Cow::Owned(config)
        }
        _ => Cow::Borrowed(config),
    }
}
