// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EnvironmentConfig
//! EnvironmentConfig: platform, package_name, sdk_version, build_prop,
//!                    home_dir_policy, shell_command_overlay
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::system::DEFAULT_BUILD_PROP;
use crate::logging::LogLevel;
use crate::platform::PlatformKind;
use crate::shell::home::HomeDirPolicy;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// How shell command environments are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Which platform base environment to use.
    pub platform: PlatformKind,
    /// Package name passed to the shell-command overlay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    /// Overrides the SDK version read from `build_prop`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<u32>,
    /// Location of the system build properties.
    pub build_prop: PathBuf,
    /// Behaviour when `HOME` cannot be created.
    pub home_dir_policy: HomeDirPolicy,
    /// Whether the `SHELL_CMD__` overlay is available to requests.
    pub shell_command_overlay: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            platform: PlatformKind::Android,
            package_name: None,
            sdk_version: None,
            build_prop: PathBuf::from(DEFAULT_BUILD_PROP),
            home_dir_policy: HomeDirPolicy::Warn,
            shell_command_overlay: true,
        }
    }
}
