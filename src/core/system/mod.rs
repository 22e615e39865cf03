// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only view of the host the environment is built for.
//!
//! ```text
//! SystemSnapshot
//!   vars         inherited process environment (std::env::vars_os)
//!   sdk_version  ro.build.version.sdk from build.prop, or config override
//! ```
//!
//! Missing variables and an unknown SDK version are normal; nothing here
//! fails once the snapshot is taken.

use regex::Regex;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{FsError, ShellEnvResult};

/// Default location of the Android system build properties.
pub const DEFAULT_BUILD_PROP: &str = "/system/build.prop";

/// Snapshot of the inherited process environment and host OS version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemSnapshot {
    vars: BTreeMap<String, String>,
    sdk_version: Option<u32>,
}

impl SystemSnapshot {
    /// Creates a snapshot from explicit variables with an unknown SDK version.
    #[must_use]
    pub const fn from_vars(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars,
            sdk_version: None,
        }
    }

    /// Creates a snapshot from raw OS variables with an unknown SDK version.
    ///
    /// Variables whose name or value is not valid UTF-8 are left out, and
    /// each one is logged at debug level.
    #[must_use]
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let vars = vars
            .into_iter()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (Ok(name), Err(_)) => {
                    tracing::debug!(name = %name, "Skipping variable with non-UTF-8 value");
                    None
                }
                (Err(name), _) => {
                    tracing::debug!(name = %name.to_string_lossy(), "Skipping variable with non-UTF-8 name");
                    None
                }
            })
            .collect();
        Self::from_vars(vars)
    }

    /// Captures the current process environment and reads the SDK version
    /// from `build_prop`.
    ///
    /// Non-UTF-8 variables are dropped as in [`Self::from_os_vars`]. A
    /// missing or unreadable `build_prop` leaves the SDK version unknown.
    #[must_use]
    pub fn capture(build_prop: &Path) -> Self {
        let sdk_version = match read_sdk_version(build_prop) {
            Ok(version) => version,
            Err(e) => {
                tracing::debug!(path = %build_prop.display(), error = %e, "SDK version unavailable");
                None
            }
        };

        Self::from_os_vars(std::env::vars_os()).with_sdk_version(sdk_version)
    }

    /// Replaces the SDK version.
    #[must_use]
    pub const fn with_sdk_version(mut self, sdk_version: Option<u32>) -> Self {
        self.sdk_version = sdk_version;
        self
    }

    /// Looks up an inherited variable by exact name.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Host OS API level, if known.
    #[must_use]
    pub const fn sdk_version(&self) -> Option<u32> {
        self.sdk_version
    }
}

/// Reads `ro.build.version.sdk` from a `build.prop` file.
///
/// Returns `Ok(None)` if the file exists but does not define the property.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be read.
pub fn read_sdk_version(build_prop: &Path) -> ShellEnvResult<Option<u32>> {
    let content = std::fs::read_to_string(build_prop)
        .map_err(|e| FsError::from_io(build_prop.display().to_string(), e))?;
    Ok(parse_sdk_version(&content))
}

fn sdk_version_regex() -> Option<&'static Regex> {
    static SDK_VERSION: OnceLock<Option<Regex>> = OnceLock::new();
    SDK_VERSION
        .get_or_init(|| {
            Regex::new(r"(?m)^[ \t]*ro\.build\.version\.sdk[ \t]*=[ \t]*([0-9]+)[ \t\r]*$").ok()
        })
        .as_ref()
}

/// Parses `ro.build.version.sdk=<n>` from `build.prop` content.
///
/// The first definition wins; a value that does not fit `u32` counts as
/// absent.
#[must_use]
pub fn parse_sdk_version(content: &str) -> Option<u32> {
    sdk_version_regex()?
        .captures(content)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests;
