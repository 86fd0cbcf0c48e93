//! status command - Show which parts of a project exist

use crate::core::project::{project_status, ProjectStatus};
use crate::core::types::ProjectName;
use crate::engine::{run_in_workspace, Context};
use crate::ui::output;
use anyhow::{bail, Result};

/// Report the layout of `project`.
///
/// Fails if `data/<project>` does not exist; models and configs are not
/// inspected in that case.
pub fn status(ctx: &Context, project: &str, json: bool) -> Result<ProjectStatus> {
    let project = ProjectName::new(project)?;
    let verbosity = ctx.verbosity();

    run_in_workspace(ctx, |ws| {
        let Some(status) = project_status(&ws.paths, &project) else {
            bail!("SEM project '{project}' not found");
        };

        if json {
            output::json(&status)?;
        } else {
            output::print(format!("Status for SEM project: {project}"), verbosity);
            for (label, exists) in status.entries() {
                output::print(format!("  {label}: {}", output::presence(exists)), verbosity);
            }
        }
        Ok(status)
    })
}
