// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (BTreeMap<String, String>)
//! Sources: Env::new(), Env::from_map(), FromIterator
//! Ops: set/get/put_if_set/merge_overwrite
//! Sinks: to_environ(), to_dotenv(), Serialize (JSON)
//! ```
//!
//! - **Case-sensitive**: Android and Unix treat `Path` and `PATH` as distinct
//! - **Deterministic order**: equal inputs render byte-identical output

pub mod container;
pub mod names;

#[cfg(test)]
mod tests;

pub use container::Env;
