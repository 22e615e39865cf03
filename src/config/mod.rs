// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for shellenv.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. shellenv.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. SHELLENV_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SHELLENV_ENVIRONMENT__PLATFORM=unix      → environment.platform = "unix"
//! SHELLENV_ENVIRONMENT__SDK_VERSION=34     → environment.sdk_version = 34
//! SHELLENV_GLOBAL__OUTPUT_LOG_LEVEL=4      → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::system::SystemSnapshot;
use crate::error::{ConfigError, Result};
use crate::shell::{PackageContext, ShellCommandShellEnvironment, ShellEnvironmentBuilder};

use loader::ConfigLoader;
use types::{EnvironmentConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Environment building options.
    pub environment: EnvironmentConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shellenv::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("shellenv.toml")
    ///     .with_env_prefix("SHELLENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty `build_prop` or
    /// `package_name`.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.environment.build_prop.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "environment".to_string(),
                key: "build_prop".to_string(),
                message: "path must not be empty".to_string(),
            });
        }
        if self.environment.package_name.as_deref() == Some("") {
            return Err(ConfigError::InvalidValue {
                section: "environment".to_string(),
                key: "package_name".to_string(),
                message: "omit the key instead of setting it to an empty string".to_string(),
            });
        }
        Ok(())
    }

    /// Captures the host and returns a builder configured from `[environment]`.
    ///
    /// `sdk_version`, when set, replaces the value read from `build_prop`.
    #[must_use]
    pub fn environment_builder(&self) -> ShellEnvironmentBuilder {
        let env = &self.environment;
        let mut system = SystemSnapshot::capture(&env.build_prop);
        if env.sdk_version.is_some() {
            system = system.with_sdk_version(env.sdk_version);
        }

        let builder = ShellEnvironmentBuilder::new(env.platform.environment(), system)
            .with_home_dir_policy(env.home_dir_policy);

        if env.shell_command_overlay {
            builder.with_overlay(ShellCommandShellEnvironment)
        } else {
            builder
        }
    }

    /// Returns the package context described by `[environment]`.
    #[must_use]
    pub fn package_context(&self) -> PackageContext {
        self.environment
            .package_name
            .as_deref()
            .map_or_else(PackageContext::anonymous, PackageContext::new)
    }

    /// Format configuration options for display.
    ///
    /// Output is sorted by key and aligned on `=`. Unset optional values are
    /// left out.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_environment_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_environment_options(&self, options: &mut BTreeMap<String, String>) {
        let env = &self.environment;
        options.insert("environment.platform".into(), env.platform.to_string());
        if let Some(name) = &env.package_name {
            options.insert("environment.package_name".into(), name.clone());
        }
        if let Some(version) = env.sdk_version {
            options.insert("environment.sdk_version".into(), version.to_string());
        }
        options.insert(
            "environment.build_prop".into(),
            env.build_prop.display().to_string(),
        );
        options.insert(
            "environment.home_dir_policy".into(),
            env.home_dir_policy.to_string(),
        );
        options.insert(
            "environment.shell_command_overlay".into(),
            env.shell_command_overlay.to_string(),
        );
    }
}
