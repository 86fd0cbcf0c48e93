//! engine::runner
//!
//! Engine runner - the single entry point for workspace command execution.
//!
//! # Architecture
//!
//! ```text
//! Open -> Handler -> Save -> Return
//! ```
//!
//! # Invariants
//!
//! - The marker is saved after the handler even when the handler fails, so
//!   a `delete` that cleared the current project before a later error still
//!   takes effect
//! - The handler's error takes precedence over a save error

use anyhow::Result;

use super::workspace::{Workspace, WorkspaceError};
use super::Context;

/// Open the workspace, run `handler`, then save the marker.
pub fn run_in_workspace<T, F>(ctx: &Context, handler: F) -> Result<T>
where
    F: FnOnce(&mut Workspace) -> Result<T>,
{
    let root = ctx.workspace_root().map_err(WorkspaceError::Root)?;
    let mut workspace = Workspace::open(root)?;

    let result = handler(&mut workspace);
    let saved = workspace.save();

    match (result, saved) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e.into()),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(save_err)) => {
            tracing::error!(error = %save_err, "failed to save current project marker");
            Err(e)
        }
    }
}
