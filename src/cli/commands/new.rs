//! new command - Create a SEM project and make it current

use crate::core::project::{create_project, CreateReport};
use crate::core::types::ProjectName;
use crate::engine::{run_in_workspace, Context};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Create a project skeleton and select it.
///
/// Existing config files are kept; the report lists which ones.
pub fn new(ctx: &Context, name: &str) -> Result<CreateReport> {
    let project = ProjectName::new(name)?;
    let verbosity = ctx.verbosity();

    run_in_workspace(ctx, |ws| {
        let report = create_project(&ws.paths, &project)
            .with_context(|| format!("Failed to create project '{project}'"))?;
        ws.context.set(project.clone());

        for kept in &report.kept {
            output::print(format!("Kept existing {}", kept.display()), verbosity);
        }
        output::print(format!("Created new SEM project: {project}"), verbosity);
        Ok(report)
    })
}
