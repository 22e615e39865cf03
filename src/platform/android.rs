// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Android base environment.
//!
//! Variable sources on device:
//! - `system/core/rootdir/init.environ.rc.in` (`ANDROID_*`, `*CLASSPATH`)
//! - `frameworks/base/core/java/android/os/Environment.java`
//! - `ro.build.version.sdk` for `ANDROID__BUILD_VERSION_SDK`

use tracing::{debug, trace};

use super::{DEFAULT_COLORTERM, DEFAULT_LANG, DEFAULT_TERM, PlatformEnvironment, PlatformKind};
use crate::core::env::Env;
use crate::core::env::names::{
    ANDROID_SYSTEM_VARIABLES, ENV_ANDROID_BUILD_VERSION_SDK, ENV_COLORTERM, ENV_HOME, ENV_LANG,
    ENV_PATH, ENV_TERM, ENV_TMPDIR,
};
use crate::core::system::SystemSnapshot;
use crate::shell::context::PackageContext;

pub const ANDROID_HOME: &str = "/";
pub const ANDROID_TMPDIR: &str = "/data/local/tmp";
pub const ANDROID_WORKING_DIRECTORY: &str = "/";
pub const ANDROID_BIN_PATH: &str = "/system/bin";

/// Environment for commands run directly against the Android system.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidEnvironment;

impl PlatformEnvironment for AndroidEnvironment {
    fn build_base_environment(
        &self,
        _context: &PackageContext,
        system: &SystemSnapshot,
        _is_failsafe: bool,
    ) -> Env {
        let mut env = Env::new();
        env.set(ENV_HOME, ANDROID_HOME)
            .set(ENV_LANG, DEFAULT_LANG)
            .set(ENV_TMPDIR, ANDROID_TMPDIR)
            .set(ENV_COLORTERM, DEFAULT_COLORTERM)
            .set(ENV_TERM, DEFAULT_TERM);

        // PATH is mandatory; fall back to the system bin dir if not inherited
        match system.var(ENV_PATH) {
            Some(path) => env.set(ENV_PATH, path),
            None => {
                debug!("PATH not inherited, using {ANDROID_BIN_PATH}");
                env.set(ENV_PATH, ANDROID_BIN_PATH)
            }
        };

        for name in ANDROID_SYSTEM_VARIABLES {
            if env.put_if_in_system(name, system) {
                trace!(name, "Copied system variable");
            } else {
                debug!(name, "System variable not set, skipping");
            }
        }

        env.put_if_set(
            ENV_ANDROID_BUILD_VERSION_SDK,
            system.sdk_version().map(|v| v.to_string()),
        );

        env
    }

    fn default_working_directory_path(&self) -> &str {
        ANDROID_WORKING_DIRECTORY
    }

    fn default_bin_path(&self) -> &str {
        ANDROID_BIN_PATH
    }

    fn kind(&self) -> PlatformKind {
        PlatformKind::Android
    }
}
