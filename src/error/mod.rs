// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   ShellEnvError (16 bytes)     returned by core and shell
//!         |
//!     +---+---+
//!     v       v
//!    Fs      Env
//!    Box     Box
//!
//!   Fs      NotFound, PermissionDenied, IoError, CurrentDir, NonUtf8Path
//!   Env     HomeDirUnavailable
//!
//!   ConfigError  InvalidValue       returned by config validation
//! ```
//!
//! Application code (`cmd`, `main`) works in `anyhow::Result` and converts
//! with `?`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ShellEnvError`].
pub type ShellEnvResult<T> = std::result::Result<T, ShellEnvError>;

/// Top-level error type.
///
/// All sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum ShellEnvError {
    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Environment assembly error.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ShellEnvError {
                fn from(err: $error) -> Self {
                    ShellEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    FsError => Fs,
    EnvError => Env,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value deserialized but cannot be used.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The process current directory could not be determined.
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// A path that must be exported as a variable value is not UTF-8.
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(String),
}

impl FsError {
    /// Classifies an I/O error on `path` into the closest variant.
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoError { path, source },
        }
    }
}

// --- Environment Errors ---

/// Errors raised while assembling or exporting an environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The `HOME` directory could not be created.
    #[error("failed to create home directory '{path}': {source}")]
    HomeDirUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
