//! init command - Create the workspace skeleton and environment

use crate::core::project::init_base_dirs;
use crate::engine::{run_in_workspace, Context};
use crate::env::{EnvManager, EnvOutcome, EnvSpec, ProcessRunner, SystemRunner};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Initialize the workspace.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `no_env` - Skip the environment manager
pub fn init(ctx: &Context, no_env: bool) -> Result<()> {
    init_with(ctx, no_env, &SystemRunner)
}

/// [`init`] with an injected process runner.
pub fn init_with<R: ProcessRunner + ?Sized>(ctx: &Context, no_env: bool, runner: &R) -> Result<()> {
    let verbosity = ctx.verbosity();

    run_in_workspace(ctx, |ws| {
        let created = init_base_dirs(&ws.paths).context("Failed to create base directories")?;
        for dir in &created {
            tracing::debug!(path = %dir.display(), "created base directory");
        }

        if !no_env {
            let config = ws.settings()?;
            if let Some(path) = config.path() {
                output::print(format!("Using settings from {}", path.display()), verbosity);
            }
            let manager =
                EnvManager::new(runner, EnvSpec::from_settings(&config.settings, &ws.paths));
            let name = manager.spec().name.clone();

            manager.locate().with_context(|| {
                format!(
                    "Cannot set up environment '{name}'. \
                     Install {} or run 'init --no-env'.",
                    manager.spec().manager
                )
            })?;

            output::print(
                format!("Ensuring {} environment '{name}'...", manager.spec().manager),
                verbosity,
            );
            match manager
                .ensure()
                .with_context(|| format!("Failed to set up environment '{name}'"))?
            {
                EnvOutcome::Created => output::print(
                    format!("Environment '{name}' created and requirements installed."),
                    verbosity,
                ),
                EnvOutcome::AlreadyExists => output::print(
                    format!("Environment '{name}' already exists."),
                    verbosity,
                ),
            }
        }

        output::print("Initialized OpenSEM workspace.", verbosity);
        Ok(())
    })
}
