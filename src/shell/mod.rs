// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell command environment assembly.
//!
//! ```text
//! PackageContext + ExecutionRequest
//!              |
//!              v
//!   ShellEnvironmentBuilder --- PlatformEnvironment (android | unix)
//!              |            --- SystemSnapshot
//!              |            --- HomeDirCreator + HomeDirPolicy
//!              |            --- ShellCommandOverlay (optional)
//!              v
//!             Env
//! ```

pub mod builder;
pub mod context;
pub mod home;
pub mod overlay;
pub mod request;


pub use builder::ShellEnvironmentBuilder;
pub use context::PackageContext;
pub use home::{FsHomeDirCreator, HomeDirCreator, HomeDirPolicy};
pub use overlay::{ShellCommandOverlay, ShellCommandShellEnvironment};
pub use request::{ExecutionRequest, Runner};
