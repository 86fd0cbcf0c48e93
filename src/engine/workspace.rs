//! engine::workspace
//!
//! An opened workspace: resolved paths plus the current-project marker.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::{Config, ConfigError};
use crate::core::context::{ContextError, ProjectContext};
use crate::core::paths::WorkspacePaths;
use crate::core::types::{ProjectName, TypeError};

/// Errors from opening a workspace or resolving its project.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("cannot determine workspace root: {0}")]
    Root(#[source] std::io::Error),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidName(#[from] TypeError),

    #[error(
        "No project specified and no current project set. \
         Use 'set-project <name>' or specify a project."
    )]
    NoProject,
}

/// A workspace opened for one command.
#[derive(Debug)]
pub struct Workspace {
    pub paths: WorkspacePaths,
    pub context: ProjectContext,
}

impl Workspace {
    /// Open the workspace at `root`, reading the current-project marker.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, WorkspaceError> {
        let paths = WorkspacePaths::new(root);
        let context = ProjectContext::load(paths.marker_path())?;
        tracing::debug!(root = %paths.root().display(), "opened workspace");
        Ok(Self { paths, context })
    }

    /// Load `opensem.toml` (defaults if absent).
    pub fn settings(&self) -> Result<Config, WorkspaceError> {
        Ok(Config::load(self.paths.root())?)
    }

    /// The explicit project if given, else the current one.
    ///
    /// # Errors
    ///
    /// - `WorkspaceError::InvalidName` if `explicit` is not a valid name
    /// - `WorkspaceError::NoProject` if neither is available
    pub fn resolve_project(&self, explicit: Option<&str>) -> Result<ProjectName, WorkspaceError> {
        match explicit {
            Some(name) => Ok(ProjectName::new(name)?),
            None => self
                .context
                .current()
                .cloned()
                .ok_or(WorkspaceError::NoProject),
        }
    }

    /// Persist marker changes.
    pub fn save(&mut self) -> Result<(), WorkspaceError> {
        Ok(self.context.save()?)
    }
}
