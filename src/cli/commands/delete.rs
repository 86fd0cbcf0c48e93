//! delete command - Remove a project and all its data
//!
//! # Integrity Contract
//!
//! - Nothing is removed unless the user answers `y` or passes `--yes`
//! - Each of `data/`, `models/`, `configs/` is removed independently
//! - The current-project marker is cleared only if it names this project

use crate::core::project::{delete_project, DeleteReport};
use crate::core::types::ProjectName;
use crate::engine::{run_in_workspace, Context};
use crate::ui::output;
use crate::ui::prompts::{self, PromptError};
use anyhow::{bail, Context as _, Result};

/// Result of [`delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined.
    Cancelled,
    Deleted(DeleteReport),
}

/// Delete a project.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `name` - Project to delete
/// * `yes` - Skip the confirmation prompt
pub fn delete(ctx: &Context, name: &str, yes: bool) -> Result<DeleteOutcome> {
    let project = ProjectName::new(name)?;
    let verbosity = ctx.verbosity();

    if !yes {
        let question =
            format!("Are you sure you want to delete SEM project '{project}' and all its data?");
        match prompts::confirm(&question, ctx.interactive) {
            Ok(true) => {}
            Ok(false) => {
                output::print("Deletion cancelled.", verbosity);
                return Ok(DeleteOutcome::Cancelled);
            }
            Err(PromptError::NotInteractive) => bail!(
                "Refusing to delete '{project}' without confirmation. \
                 Use --yes in non-interactive mode."
            ),
            Err(e) => return Err(e.into()),
        }
    }

    run_in_workspace(ctx, |ws| {
        let report = delete_project(&ws.paths, &project)
            .with_context(|| format!("Failed to delete project '{project}'"))?;

        for path in &report.removed {
            output::print(format!("Deleted {}", path.display()), verbosity);
        }
        if ws.context.clear_if(&project) {
            output::print(
                format!("Current project '{project}' removed from context."),
                verbosity,
            );
        }
        if !report.removed_any() {
            output::print(
                format!("No directories found for project '{project}'."),
                verbosity,
            );
        }
        Ok(DeleteOutcome::Deleted(report))
    })
}
