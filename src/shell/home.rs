// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Home directory creation.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ensures a directory exists. Must succeed if it already does.
pub trait HomeDirCreator: Send + Sync + std::fmt::Debug {
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be created.
    fn ensure_dir(&self, path: &Path) -> std::io::Result<()>;
}

/// Creates the directory and any missing parents on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsHomeDirCreator;

impl HomeDirCreator for FsHomeDirCreator {
    fn ensure_dir(&self, path: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// What to do when the home directory cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeDirPolicy {
    /// Log a warning and return the environment anyway.
    #[default]
    Warn,
    /// Fail the build with `EnvError::HomeDirUnavailable`.
    Propagate,
}

impl std::fmt::Display for HomeDirPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}
