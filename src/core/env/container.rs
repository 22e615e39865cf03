// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable map.
//!
//! ```text
//! Env (BTreeMap<String, String>, case-sensitive, sorted)
//!   set / get / remove / put_if_set / merge_overwrite
//!   to_environ()  NAME=value lines for execve-style blocks
//!   to_dotenv()   export NAME="value" lines, shell-escaped
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::names::is_valid_name;
use crate::core::system::SystemSnapshot;

/// A set of environment variables destined for a child process.
///
/// Keys are case-sensitive (Unix semantics) and iterate in sorted order, so
/// two environments built from the same inputs compare and render equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Env {
    vars: BTreeMap<String, String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Sets `key` only when `value` is `Some`.
    ///
    /// Returns whether the variable was written.
    pub fn put_if_set<V: Into<String>>(&mut self, key: impl Into<String>, value: Option<V>) -> bool {
        match value {
            Some(value) => {
                self.set(key, value);
                true
            }
            None => false,
        }
    }

    /// Copies `name` from the host snapshot if the host has it.
    pub fn put_if_in_system(&mut self, name: &str, system: &SystemSnapshot) -> bool {
        self.put_if_set(name, system.var(name))
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(key);
        self
    }

    /// Merges `other` into `self`; values from `other` win on conflicts.
    pub fn merge_overwrite(&mut self, other: Self) -> &mut Self {
        self.vars.extend(other.vars);
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }

    /// Consumes the environment and returns the underlying map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.vars
    }

    /// Returns an iterator over environment variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Renders the environment as `NAME=value` entries.
    ///
    /// Entries with an invalid name or a value containing NUL are skipped,
    /// since neither can be represented in a process environment block.
    #[must_use]
    pub fn to_environ(&self) -> Vec<String> {
        self.exportable()
            .map(|(key, value)| format!("{key}={value}"))
            .collect()
    }

    /// Renders the environment as a sourceable shell script.
    ///
    /// Each entry becomes `export NAME="value"` with `\`, `"`, `$` and `` ` ``
    /// escaped inside the double quotes.
    #[must_use]
    pub fn to_dotenv(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.exportable() {
            let _ = writeln!(out, "export {key}=\"{}\"", escape_double_quoted(value));
        }
        out
    }

    fn exportable(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(key, value)| {
            let ok = is_valid_name(key) && !value.contains('\0');
            if !ok {
                tracing::debug!(name = key, "Skipping variable that cannot be exported");
            }
            ok
        })
    }
}

impl FromIterator<(String, String)> for Env {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Env {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

fn escape_double_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
