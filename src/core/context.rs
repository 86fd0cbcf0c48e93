//! core::context
//!
//! The current-project marker.
//!
//! # Lifecycle
//!
//! The marker is a single file at `<root>/.openssme_project` holding one
//! project name. It is read once when the workspace is opened, changed in
//! memory by commands (`new`, `set-project`, `delete`), and written back once
//! when the command finishes. Writes happen only if something changed.
//!
//! Contents are trimmed on read. An empty file, or one holding something
//! that is not a valid project name, reads as "none set".

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::ProjectName;

/// Display text when no project is selected.
pub const NONE_SET: &str = "none set";

/// Errors from marker file access.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("failed to read current project marker '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write current project marker '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// In-memory view of the current-project marker.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    path: PathBuf,
    current: Option<ProjectName>,
    dirty: bool,
}

impl ProjectContext {
    /// Read the marker file at `path`. A missing file means no current project.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ContextError> {
        let path = path.into();
        let current = match fs::read_to_string(&path) {
            Ok(contents) => parse_marker(&path, &contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(ContextError::Read { path, source: e }),
        };

        Ok(Self {
            path,
            current,
            dirty: false,
        })
    }

    /// The current project, if one is set.
    pub fn current(&self) -> Option<&ProjectName> {
        self.current.as_ref()
    }

    /// Select `name` as the current project.
    pub fn set(&mut self, name: ProjectName) {
        if self.current.as_ref() != Some(&name) {
            tracing::debug!(project = %name, "current project changed");
            self.current = Some(name);
            self.dirty = true;
        }
    }

    /// Forget the current project.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("current project cleared");
        }
        // Always rewrite on clear so a stale or unparseable marker is removed.
        self.dirty = true;
    }

    /// Clear the marker only if it points at `name`. Returns whether it did.
    pub fn clear_if(&mut self, name: &ProjectName) -> bool {
        if self.current.as_ref() == Some(name) {
            self.clear();
            true
        } else {
            false
        }
    }

    /// Whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist the marker if it changed. Clearing removes the file.
    pub fn save(&mut self) -> Result<(), ContextError> {
        if !self.dirty {
            return Ok(());
        }

        match &self.current {
            Some(name) => {
                fs::write(&self.path, name.as_str()).map_err(|e| ContextError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
            None => match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(ContextError::Write {
                        path: self.path.clone(),
                        source: e,
                    })
                }
            },
        }

        self.dirty = false;
        Ok(())
    }
}

impl fmt::Display for ProjectContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.current {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{NONE_SET}"),
        }
    }
}

fn parse_marker(path: &Path, contents: &str) -> Option<ProjectName> {
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return None;
    }
    match ProjectName::new(trimmed) {
        Ok(name) => Some(name),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring invalid current project marker");
            None
        }
    }
}
