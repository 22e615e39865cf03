// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

/// The app package on whose behalf a command is launched.
///
/// The builder never inspects this; it is handed through to the
/// shell-command overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageContext {
    package_name: Option<String>,
}

impl PackageContext {
    #[must_use]
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: Some(package_name.into()),
        }
    }

    /// A context with no package identity, for plain CLI use.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { package_name: None }
    }

    #[must_use]
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }
}
