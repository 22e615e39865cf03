// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generic Unix base environment.

use super::{DEFAULT_COLORTERM, DEFAULT_LANG, DEFAULT_TERM, PlatformEnvironment, PlatformKind};
use crate::core::env::Env;
use crate::core::env::names::{
    ENV_COLORTERM, ENV_HOME, ENV_LANG, ENV_PATH, ENV_TERM, ENV_TMPDIR,
};
use crate::core::system::SystemSnapshot;
use crate::shell::context::PackageContext;

pub const UNIX_TMPDIR: &str = "/tmp";
pub const UNIX_WORKING_DIRECTORY: &str = "/";
pub const UNIX_BIN_PATH: &str = "/usr/bin";

/// Environment for a regular Unix host.
///
/// `HOME`, `LANG`, `PATH` and `TMPDIR` are inherited when set, with fixed
/// fallbacks otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixEnvironment;

impl PlatformEnvironment for UnixEnvironment {
    fn build_base_environment(
        &self,
        _context: &PackageContext,
        system: &SystemSnapshot,
        _is_failsafe: bool,
    ) -> Env {
        let inherit = |name: &str, fallback: &str| system.var(name).unwrap_or(fallback).to_string();

        let mut env = Env::new();
        env.set(ENV_HOME, inherit(ENV_HOME, UNIX_WORKING_DIRECTORY))
            .set(ENV_LANG, inherit(ENV_LANG, DEFAULT_LANG))
            .set(ENV_PATH, inherit(ENV_PATH, UNIX_BIN_PATH))
            .set(ENV_TMPDIR, inherit(ENV_TMPDIR, UNIX_TMPDIR))
            .set(ENV_COLORTERM, DEFAULT_COLORTERM)
            .set(ENV_TERM, DEFAULT_TERM);
        env
    }

    fn default_working_directory_path(&self) -> &str {
        UNIX_WORKING_DIRECTORY
    }

    fn default_bin_path(&self) -> &str {
        UNIX_BIN_PATH
    }

    fn kind(&self) -> PlatformKind {
        PlatformKind::Unix
    }
}
