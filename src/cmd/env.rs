// shellenv: Shell Command Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command implementation.
//!
//! ```text
//! Config + EnvArgs
//!   |-- environment_builder()   capture host, platform, overlay
//!   |-- to_request()            ExecutionRequest
//!   v
//! build_shell_command_environment() --> render(format) --> stdout
//! ```

use std::io::Write;

use tracing::info;

use crate::cli::env::{EnvArgs, OutputFormat};
use crate::config::Config;
use crate::core::env::Env;
use crate::error::Result;

use super::with_platform_override;

/// Builds the environment described by `args` and `config`.
///
/// # Errors
///
/// Returns an error if the working directory cannot be resolved or the home
/// directory cannot be created under the `propagate` policy.
pub fn build_environment(args: &EnvArgs, config: &Config) -> Result<Env> {
    let config = with_platform_override(config, &args.platform);
    let builder = config.environment_builder();
    let context = config.package_context();
    let request = args.to_request();

    let env = builder.build_shell_command_environment(&context, &request)?;
    info!(
        platform = %builder.platform().kind(),
        count = env.len(),
        "Built shell command environment"
    );
    Ok(env)
}

/// Renders `env` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_environment(env: &Env, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Environ => {
            let mut out = env.to_environ().join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            out
        }
        OutputFormat::Dotenv => env.to_dotenv(),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(env)?;
            out.push('\n');
            out
        }
    };
    Ok(rendered)
}

/// Main handler for the env command.
///
/// # Errors
///
/// Returns an error if the environment cannot be built or written to stdout.
pub fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let env = build_environment(args, config)?;
    let rendered = render_environment(&env, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
