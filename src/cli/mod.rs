// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! shellenv [global options] <command>
//! version
//! options
//! inis
//! env [request options] [--format environ|dotenv|json]
//! paths
//! ```

pub mod env;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::env::{EnvArgs, PathsArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Shell command environment builder for Android.
#[derive(Debug, Parser)]
#[command(
    name = "shellenv",
    author,
    version,
    about = "Shell command environment builder",
    long_about = "shellenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds the environment a shell command would be launched with\n\
                  on Android (or a generic Unix host) and prints it.",
    after_help = "CONFIG FILES:\n\n\
                  shellenv loads `shellenv.toml` from the current directory if it\n\
                  exists, then every file given with --ini, in order. SHELLENV_*\n\
                  environment variables and --set options are applied last.\n\
                  Use --no-default-inis to skip `shellenv.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Prints the environment for a shell command.
    Env(EnvArgs),

    /// Prints the default working directory and bin path.
    Paths(PathsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

