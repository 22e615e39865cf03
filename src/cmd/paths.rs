// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Paths command implementation.

use crate::cli::env::PathsArgs;
use crate::config::Config;

use super::with_platform_override;

/// Returns the `working_directory` and `bin_path` lines for the selected
/// platform.
#[must_use]
pub fn format_paths(args: &PathsArgs, config: &Config) -> Vec<String> {
    let config = with_platform_override(config, &args.platform);
    let platform = config.environment.platform.environment();
    vec![
        format!("working_directory = {}", platform.default_working_directory_path()),
        format!("bin_path          = {}", platform.default_bin_path()),
    ]
}

/// Main handler for the paths command.
pub fn run_paths_command(args: &PathsArgs, config: &Config) {
    for line in format_paths(args, config) {
        println!("{line}");
    }
}
