// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Assembles the full environment for a shell command.
//!
//! ```text
//! build_shell_command_environment(ctx, request)
//!   1. platform.build_base_environment(ctx, system, request.is_failsafe)
//!   2. PWD = absolute(request.working_directory) | platform default
//!   3. home_dir.ensure_dir(HOME)       -- Warn | Propagate on failure
//!   4. overlay.environment(ctx, request) merged over the result
//!      (only if request.set_shell_command_shell_environment)
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::context::PackageContext;
use super::home::{FsHomeDirCreator, HomeDirCreator, HomeDirPolicy};
use super::overlay::ShellCommandOverlay;
use super::request::ExecutionRequest;
use crate::core::env::Env;
use crate::core::env::names::{ENV_HOME, ENV_PWD};
use crate::core::system::SystemSnapshot;
use crate::error::{EnvError, FsError, ShellEnvResult};
use crate::platform::PlatformEnvironment;

/// Builds shell command environments for one platform and host snapshot.
///
/// Collaborators are fixed at construction; a builder can be shared and
/// reused for any number of requests.
#[derive(Debug)]
pub struct ShellEnvironmentBuilder {
    platform: Box<dyn PlatformEnvironment>,
    system: SystemSnapshot,
    overlay: Option<Box<dyn ShellCommandOverlay>>,
    home_dir: Box<dyn HomeDirCreator>,
    home_dir_policy: HomeDirPolicy,
}

impl ShellEnvironmentBuilder {
    /// Creates a builder with no overlay, filesystem home creation and the
    /// default [`HomeDirPolicy`].
    #[must_use]
    pub fn new(platform: Box<dyn PlatformEnvironment>, system: SystemSnapshot) -> Self {
        Self {
            platform,
            system,
            overlay: None,
            home_dir: Box::new(FsHomeDirCreator),
            home_dir_policy: HomeDirPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: impl ShellCommandOverlay + 'static) -> Self {
        self.overlay = Some(Box::new(overlay));
        self
    }

    #[must_use]
    pub fn with_home_dir_creator(mut self, creator: impl HomeDirCreator + 'static) -> Self {
        self.home_dir = Box::new(creator);
        self
    }

    #[must_use]
    pub const fn with_home_dir_policy(mut self, policy: HomeDirPolicy) -> Self {
        self.home_dir_policy = policy;
        self
    }

    #[must_use]
    pub fn platform(&self) -> &dyn PlatformEnvironment {
        self.platform.as_ref()
    }

    #[must_use]
    pub const fn system(&self) -> &SystemSnapshot {
        &self.system
    }

    /// Returns the platform base environment without `PWD` or overlay.
    #[must_use]
    pub fn build_base_environment(&self, context: &PackageContext, is_failsafe: bool) -> Env {
        self.platform
            .build_base_environment(context, &self.system, is_failsafe)
    }

    #[must_use]
    pub fn default_working_directory_path(&self) -> &str {
        self.platform.default_working_directory_path()
    }

    #[must_use]
    pub fn default_bin_path(&self) -> &str {
        self.platform.default_bin_path()
    }

    /// Resolves the `PWD` for `request`.
    ///
    /// A non-empty working directory is made absolute against the process
    /// current directory without touching the filesystem; otherwise the
    /// platform default is used.
    ///
    /// # Errors
    ///
    /// Returns `FsError::CurrentDir` if a relative path is given and the
    /// current directory cannot be determined.
    pub fn resolve_working_directory(&self, request: &ExecutionRequest) -> ShellEnvResult<PathBuf> {
        match request.working_directory() {
            Some(dir) => Ok(std::path::absolute(dir).map_err(FsError::CurrentDir)?),
            None => Ok(PathBuf::from(self.default_working_directory_path())),
        }
    }

    /// Builds the complete environment for `request`.
    ///
    /// The result always contains `PWD` plus every variable the platform
    /// marks mandatory. When the request asks for it and an overlay is
    /// configured, overlay values replace same-named variables.
    ///
    /// # Errors
    ///
    /// - `FsError::CurrentDir` if the working directory cannot be made absolute.
    /// - `FsError::NonUtf8Path` if the working directory is not valid UTF-8.
    /// - `EnvError::HomeDirUnavailable` if `HOME` cannot be created and the
    ///   policy is [`HomeDirPolicy::Propagate`].
    pub fn build_shell_command_environment(
        &self,
        context: &PackageContext,
        request: &ExecutionRequest,
    ) -> ShellEnvResult<Env> {
        let mut env = self.build_base_environment(context, request.is_failsafe);

        let pwd = self.resolve_working_directory(request)?;
        debug!(pwd = %pwd.display(), "Resolved working directory");
        let pwd = pwd
            .into_os_string()
            .into_string()
            .map_err(|os| FsError::NonUtf8Path(PathBuf::from(os).display().to_string()))?;
        env.set(ENV_PWD, pwd);

        if let Some(home) = env.get(ENV_HOME) {
            self.create_home_dir(Path::new(home))?;
        }

        if request.set_shell_command_shell_environment
            && let Some(overlay) = &self.overlay
        {
            let extra = overlay.environment(context, request);
            debug!(count = extra.len(), "Applying shell command overlay");
            env.merge_overwrite(extra);
        }

        Ok(env)
    }

    fn create_home_dir(&self, home: &Path) -> ShellEnvResult<()> {
        let Err(source) = self.home_dir.ensure_dir(home) else {
            return Ok(());
        };

        match self.home_dir_policy {
            HomeDirPolicy::Warn => {
                warn!(path = %home.display(), error = %source, "Failed to create home directory");
                Ok(())
            }
            HomeDirPolicy::Propagate => Err(EnvError::HomeDirUnavailable {
                path: home.display().to_string(),
                source,
            }
            .into()),
        }
    }
}
