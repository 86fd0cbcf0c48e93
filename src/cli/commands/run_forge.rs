//! run-forge command - Dispatch to the configured data forge

use crate::engine::{run_in_workspace, Context};
use crate::forge::dispatch::{dispatch, prepare};
use crate::forge::{ForgeRegistry, ForgeRun};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Run the forge configured for a project, using the built-in registry.
pub fn run_forge(ctx: &Context, project: Option<&str>) -> Result<ForgeRun> {
    run_forge_with(ctx, project, &ForgeRegistry::with_builtins())
}

/// [`run_forge`] with an explicit registry.
pub fn run_forge_with(
    ctx: &Context,
    project: Option<&str>,
    registry: &ForgeRegistry,
) -> Result<ForgeRun> {
    let verbosity = ctx.verbosity();

    run_in_workspace(ctx, |ws| {
        let project = ws.resolve_project(project)?;
        output::print(format!("Running Data Forge for project: {project}"), verbosity);

        let loaded = prepare(&ws.paths, &project)?;
        if let Some(warning) = &loaded.warning {
            output::warn(warning, verbosity);
        }

        let run = dispatch(registry, &loaded.config)
            .with_context(|| format!("Data Forge failed for project '{project}'"))?;

        let mut summary = format!(
            "{} produced {} record(s)",
            run.forge_class, run.report.records
        );
        if run.report.skipped > 0 {
            summary.push_str(&format!(", skipped {}", run.report.skipped));
        }
        if let Some(path) = &run.report.output {
            summary.push_str(&format!(" -> {}", path.display()));
        }
        output::print(summary, verbosity);
        Ok(run)
    })
}
