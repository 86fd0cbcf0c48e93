//! list-projects command - Enumerate projects under data/

use std::collections::BTreeMap;

use crate::core::project::{list_projects as scan_projects, ProjectEntry};
use crate::engine::{run_in_workspace, Context};
use crate::ui::output;
use anyhow::Result;

/// List projects.
///
/// Returns `None` when the workspace has no data directory. With `json`,
/// prints a `name -> complete` object (`null` without a data directory).
pub fn list_projects(ctx: &Context, json: bool) -> Result<Option<Vec<ProjectEntry>>> {
    let verbosity = ctx.verbosity();

    run_in_workspace(ctx, |ws| {
        let projects = scan_projects(&ws.paths)?;

        if json {
            let mapping: Option<BTreeMap<&str, bool>> = projects
                .as_ref()
                .map(|ps| ps.iter().map(|p| (p.name.as_str(), p.complete)).collect());
            output::json(&mapping)?;
            return Ok(projects);
        }

        match &projects {
            None => output::print("No data directory found.", verbosity),
            Some(ps) if ps.is_empty() => output::print("No SEM projects.", verbosity),
            Some(ps) => {
                let current = ws.context.current();
                let lines: Vec<String> = ps
                    .iter()
                    .map(|p| {
                        let marker = if current.is_some_and(|c| c.as_str() == p.name) {
                            " (current)"
                        } else {
                            ""
                        };
                        let incomplete = if p.complete { "" } else { " [incomplete]" };
                        format!("{}{marker}{incomplete}", p.name)
                    })
                    .collect();
                output::print("SEM Projects:", verbosity);
                output::print(output::format_list(&lines, "- "), verbosity);
            }
        }
        Ok(projects)
    })
}
