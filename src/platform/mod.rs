// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform-specific base environments.
//!
//! ```text
//! PlatformEnvironment (trait)
//!   build_base_environment(ctx, system, failsafe) -> Env
//!   default_working_directory_path()
//!   default_bin_path()
//!        |
//!   +----+-----------------+
//!   v                      v
//! AndroidEnvironment    UnixEnvironment
//!   HOME=/                HOME inherited or /
//!   TMPDIR=/data/local/tmp TMPDIR inherited or /tmp
//!   bin=/system/bin        bin=/usr/bin
//!   ANDROID_* copied       -
//! ```
//!
//! The variant is chosen by [`PlatformKind`], normally from configuration.

pub mod android;
pub mod unix;


use serde::{Deserialize, Serialize};

use crate::core::env::Env;
use crate::core::system::SystemSnapshot;
use crate::shell::context::PackageContext;

pub use android::AndroidEnvironment;
pub use unix::UnixEnvironment;

/// Default `LANG` for spawned shells.
pub const DEFAULT_LANG: &str = "en_US.UTF-8";
/// Default `COLORTERM` for spawned shells.
pub const DEFAULT_COLORTERM: &str = "truecolor";
/// Default `TERM` for spawned shells.
pub const DEFAULT_TERM: &str = "xterm-256color";

/// Builds the platform part of a shell command environment.
pub trait PlatformEnvironment: Send + Sync + std::fmt::Debug {
    /// Returns the base variables for a command on this platform.
    ///
    /// `is_failsafe` marks commands launched in failsafe mode; variants may
    /// use it to drop optional variables. Built-in variants ignore it.
    fn build_base_environment(
        &self,
        context: &PackageContext,
        system: &SystemSnapshot,
        is_failsafe: bool,
    ) -> Env;

    /// Working directory used when a request does not name one.
    fn default_working_directory_path(&self) -> &str;

    /// Directory holding the platform's standard executables.
    fn default_bin_path(&self) -> &str;

    fn kind(&self) -> PlatformKind;
}

/// Selects a [`PlatformEnvironment`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    #[default]
    Android,
    Unix,
}

impl PlatformKind {
    /// Instantiates the environment for this platform.
    #[must_use]
    pub fn environment(self) -> Box<dyn PlatformEnvironment> {
        match self {
            Self::Android => Box::new(AndroidEnvironment),
            Self::Unix => Box::new(UnixEnvironment),
        }
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::Unix => write!(f, "unix"),
        }
    }
}
