//! core::project
//!
//! Project lifecycle: create, list, inspect, delete.
//!
//! # Invariants
//!
//! - A project exists iff `data/<name>/` exists. There is no manifest.
//! - Creation is idempotent and never overwrites a config file.
//! - Deletion treats each of `data/`, `models/`, `configs/` independently;
//!   a missing subtree is not an error.
//!
//! These functions touch only the filesystem. Selecting the current project
//! and prompting for confirmation happen in the command layer.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::config::data::default_data_config;
use crate::core::paths::{WorkspacePaths, DATA_CONFIG, EVAL_CONFIG, TRAIN_CONFIG};
use crate::core::types::ProjectName;

/// Errors from project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to create '{path}': {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove '{path}': {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Ensure the workspace base directories exist. Returns the ones created.
pub fn init_base_dirs(paths: &WorkspacePaths) -> Result<Vec<PathBuf>, ProjectError> {
    let mut created = Vec::new();
    for dir in paths.base_dirs() {
        if dir.is_dir() {
            continue;
        }
        fs::create_dir_all(&dir).map_err(|e| ProjectError::Create {
            path: dir.clone(),
            source: e,
        })?;
        created.push(dir);
    }
    Ok(created)
}

/// What `create_project` did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateReport {
    /// Config files written by this call.
    pub written: Vec<PathBuf>,
    /// Config files that already existed and were left alone.
    pub kept: Vec<PathBuf>,
}

/// Create the directory skeleton and default config files for a project.
///
/// Directories use create-if-missing semantics. Each config file is created
/// only if absent (`O_EXCL`), so user edits survive repeated calls.
pub fn create_project(
    paths: &WorkspacePaths,
    project: &ProjectName,
) -> Result<CreateReport, ProjectError> {
    for dir in paths.project_skeleton(project) {
        fs::create_dir_all(&dir).map_err(|e| ProjectError::Create {
            path: dir.clone(),
            source: e,
        })?;
    }

    let configs_dir = paths.project_configs_dir(project);
    let mut report = CreateReport::default();

    let files = [
        (TRAIN_CONFIG, format!("# {TRAIN_CONFIG} for {project}\n")),
        (EVAL_CONFIG, format!("# {EVAL_CONFIG} for {project}\n")),
        (DATA_CONFIG, default_data_config(project)),
    ];
    for (file_name, contents) in files {
        let path = configs_dir.join(file_name);
        if write_if_absent(&path, &contents)? {
            report.written.push(path);
        } else {
            report.kept.push(path);
        }
    }

    tracing::debug!(
        project = %project,
        written = report.written.len(),
        kept = report.kept.len(),
        "project skeleton ensured"
    );
    Ok(report)
}

/// Write `contents` to `path` unless the file exists. Returns whether it wrote.
fn write_if_absent(path: &Path, contents: &str) -> Result<bool, ProjectError> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(ProjectError::Create {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    file.write_all(contents.as_bytes())
        .map_err(|e| ProjectError::Create {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(true)
}

/// Existence of each part of a project's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectStatus {
    pub raw: bool,
    pub processed: bool,
    pub golden: bool,
    pub models: bool,
    pub configs: bool,
}

impl ProjectStatus {
    /// Labelled flags, in display order.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("raw", self.raw),
            ("processed", self.processed),
            ("golden", self.golden),
            ("models", self.models),
            ("configs", self.configs),
        ]
    }

    /// True when every part exists.
    pub fn is_complete(&self) -> bool {
        self.entries().iter().all(|(_, exists)| *exists)
    }
}

/// Inspect a project.
///
/// Returns `None` if `data/<project>/` does not exist; models and configs
/// are not checked in that case.
pub fn project_status(paths: &WorkspacePaths, project: &ProjectName) -> Option<ProjectStatus> {
    if !paths.project_data_dir(project).exists() {
        return None;
    }

    Some(ProjectStatus {
        raw: paths.raw_dir(project).exists(),
        processed: paths.processed_dir(project).exists(),
        golden: paths.golden_dir(project).exists(),
        models: paths.project_models_dir(project).exists(),
        configs: paths.project_configs_dir(project).exists(),
    })
}

/// One row of `list_projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    /// Whether the full layout is present. Directories under `data/` whose
    /// names are not valid project names are listed as incomplete.
    pub complete: bool,
}

/// List the immediate subdirectories of `data/`, sorted by name.
///
/// Returns `Ok(None)` if the data directory does not exist.
pub fn list_projects(paths: &WorkspacePaths) -> Result<Option<Vec<ProjectEntry>>, ProjectError> {
    let data_root = paths.data_root();
    let entries = match fs::read_dir(&data_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ProjectError::Read {
                path: data_root,
                source: e,
            })
        }
    };

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ProjectError::Read {
            path: data_root.clone(),
            source: e,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let complete = ProjectName::new(name.as_str())
            .ok()
            .and_then(|p| project_status(paths, &p))
            .is_some_and(|s| s.is_complete());
        projects.push(ProjectEntry { name, complete });
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Some(projects))
}

/// What `delete_project` removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub removed: Vec<PathBuf>,
}

impl DeleteReport {
    pub fn removed_any(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Recursively remove a project's subtree under `data/`, `models/` and
/// `configs/`.
///
/// Each subtree is handled on its own; absent ones are skipped.
pub fn delete_project(
    paths: &WorkspacePaths,
    project: &ProjectName,
) -> Result<DeleteReport, ProjectError> {
    let mut report = DeleteReport::default();

    for path in paths.project_subtrees(project) {
        let meta = match fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(ProjectError::Read { path, source: e }),
        };

        let result = if meta.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.map_err(|e| ProjectError::Remove {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "removed project subtree");
        report.removed.push(path);
    }

    Ok(report)
}
