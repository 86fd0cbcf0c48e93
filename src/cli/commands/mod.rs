//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Runs inside the engine, which loads and saves the current-project marker
//! 3. Formats and displays output
//!
//! Handlers return their result value so library callers and tests can
//! inspect it; [`dispatch`] turns partial failures into errors for the
//! process exit status.

mod add_data;
mod completion;
mod delete;
mod init;
mod list;
mod new;
mod run_forge;
mod set_project;
mod status;

// Re-export command functions for testing and direct invocation
pub use add_data::add_data;
pub use completion::completion;
pub use delete::{delete, DeleteOutcome};
pub use init::{init, init_with};
pub use list::list_projects;
pub use new::new;
pub use run_forge::{run_forge, run_forge_with};
pub use set_project::{current, set_project};
pub use status::status;

use crate::cli::args::Command;
use crate::engine::Context;
use anyhow::{bail, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init { no_env } => init::init(ctx, no_env),
        Command::New { name } => new::new(ctx, &name).map(drop),
        Command::ListProjects { json } => list::list_projects(ctx, json).map(drop),
        Command::Status { project, json } => status::status(ctx, &project, json).map(drop),
        Command::AddData { files, project } => {
            let report = add_data::add_data(ctx, &files, project.as_deref())?;
            if report.is_complete() {
                return Ok(());
            }
            let mut problems = Vec::new();
            if !report.missing.is_empty() {
                problems.push(format!(
                    "{} of {} input(s) not found",
                    report.missing.len(),
                    files.len()
                ));
            }
            if !report.failed.is_empty() {
                problems.push(format!("{} file(s) could not be copied", report.failed.len()));
            }
            bail!("{}", problems.join("; "))
        }
        Command::RunForge { project } => run_forge::run_forge(ctx, project.as_deref()).map(drop),
        Command::SetProject { name } => set_project::set_project(ctx, &name),
        Command::Current => set_project::current(ctx).map(drop),
        Command::Delete { name, yes } => delete::delete(ctx, &name, yes).map(drop),
        Command::Completion { shell } => completion::completion(shell),
    }
}
