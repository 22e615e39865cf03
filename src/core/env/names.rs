// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Well-known environment variable names.
//!
//! ```text
//! Unix:     HOME LANG PATH PWD TMPDIR COLORTERM TERM
//! Android:  ANDROID__BUILD_VERSION_SDK + 14 init.environ.rc variables
//! Overlay:  SHELL_CMD__*
//! ```

use regex::Regex;
use std::sync::OnceLock;

pub const ENV_HOME: &str = "HOME";
pub const ENV_LANG: &str = "LANG";
pub const ENV_PATH: &str = "PATH";
pub const ENV_PWD: &str = "PWD";
pub const ENV_TMPDIR: &str = "TMPDIR";
pub const ENV_COLORTERM: &str = "COLORTERM";
pub const ENV_TERM: &str = "TERM";

/// Android build SDK version of the running device (`ro.build.version.sdk`).
pub const ENV_ANDROID_BUILD_VERSION_SDK: &str = "ANDROID__BUILD_VERSION_SDK";

/// Variables set by Android `init` that are copied through when present.
///
/// `EXTERNAL_STORAGE` is required by `/system/bin/am` on some vendor builds.
pub const ANDROID_SYSTEM_VARIABLES: [&str; 14] = [
    "ANDROID_ASSETS",
    "ANDROID_DATA",
    "ANDROID_ROOT",
    "ANDROID_STORAGE",
    "EXTERNAL_STORAGE",
    "ASEC_MOUNTPOINT",
    "LOOP_MOUNTPOINT",
    "ANDROID_RUNTIME_ROOT",
    "ANDROID_ART_ROOT",
    "ANDROID_I18N_ROOT",
    "ANDROID_TZDATA_ROOT",
    "BOOTCLASSPATH",
    "DEX2OATBOOTCLASSPATH",
    "SYSTEMSERVERCLASSPATH",
];

/// Scope prefix for variables describing the shell command itself.
pub const SHELL_CMD_ENV_SCOPE: &str = "SHELL_CMD__";

pub const ENV_SHELL_CMD_PACKAGE_NAME: &str = "SHELL_CMD__PACKAGE_NAME";
pub const ENV_SHELL_CMD_SHELL_ID: &str = "SHELL_CMD__SHELL_ID";
pub const ENV_SHELL_CMD_SHELL_NAME: &str = "SHELL_CMD__SHELL_NAME";
pub const ENV_SHELL_CMD_APP_SHELL_NUMBER_SINCE_BOOT: &str =
    "SHELL_CMD__APP_SHELL_NUMBER_SINCE_BOOT";
pub const ENV_SHELL_CMD_APP_SHELL_NUMBER_SINCE_APP_START: &str =
    "SHELL_CMD__APP_SHELL_NUMBER_SINCE_APP_START";
pub const ENV_SHELL_CMD_TERMINAL_SESSION_NUMBER_SINCE_BOOT: &str =
    "SHELL_CMD__TERMINAL_SESSION_NUMBER_SINCE_BOOT";
pub const ENV_SHELL_CMD_TERMINAL_SESSION_NUMBER_SINCE_APP_START: &str =
    "SHELL_CMD__TERMINAL_SESSION_NUMBER_SINCE_APP_START";

static NAME_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

/// Returns true if `name` is a POSIX shell identifier (`[a-zA-Z_][a-zA-Z0-9_]*`).
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN
        .get_or_init(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}
