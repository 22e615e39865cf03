// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment data.
//!
//! ```text
//!            core
//!             |
//!      +------+------+
//!      |             |
//!      v             v
//!     env         system
//!      |             |
//!    Env          SystemSnapshot
//!    names        build.prop SDK
//!    environ/dotenv
//! ```

pub mod env;
pub mod system;
