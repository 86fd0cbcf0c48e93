//! set-project and current commands - The current-project marker

use crate::core::context::NONE_SET;
use crate::core::types::ProjectName;
use crate::engine::{run_in_workspace, Context};
use crate::ui::output;
use anyhow::Result;

/// Make `name` the current project.
///
/// The project does not have to exist yet; commands that need it report
/// that themselves.
pub fn set_project(ctx: &Context, name: &str) -> Result<()> {
    let project = ProjectName::new(name)?;
    let verbosity = ctx.verbosity();

    run_in_workspace(ctx, |ws| {
        if !ws.paths.project_data_dir(&project).is_dir() {
            tracing::warn!(project = %project, "setting a project that does not exist");
        }
        output::print(format!("Current project set to '{project}'."), verbosity);
        ws.context.set(project);
        Ok(())
    })
}

/// Print the current project, or "none set".
pub fn current(ctx: &Context) -> Result<Option<ProjectName>> {
    run_in_workspace(ctx, |ws| {
        let current = ws.context.current().cloned();
        // Printed even with --quiet: this is the command's result.
        match &current {
            Some(name) => println!("{name}"),
            None => println!("{NONE_SET}"),
        }
        Ok(current)
    })
}
