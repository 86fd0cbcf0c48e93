//! core::paths
//!
//! Centralized path routing for workspace storage locations.
//!
//! # Storage Layout
//!
//! Everything lives under the workspace root:
//! - `data/<project>/{raw,processed,golden}/` - Project datasets
//! - `models/<project>/adapters/` - Trained adapters
//! - `configs/<project>/*.yaml` - Train, eval and data configs
//! - `scripts/`, `src/` - User code (created by `init`, otherwise untouched)
//! - `.openssme_project` - Current project marker
//! - `opensem.toml` - Optional workspace settings
//!
//! **Hard rule:** no code outside this module joins these directory names
//! by hand. All paths go through `WorkspacePaths`.
//!
//! # Example
//!
//! ```
//! use opensem::core::paths::WorkspacePaths;
//! use opensem::core::types::ProjectName;
//! use std::path::PathBuf;
//!
//! let paths = WorkspacePaths::new("/work");
//! let demo = ProjectName::new("demo").unwrap();
//!
//! assert_eq!(paths.raw_dir(&demo), PathBuf::from("/work/data/demo/raw"));
//! assert_eq!(
//!     paths.data_config_path(&demo),
//!     PathBuf::from("/work/configs/demo/data_config.yaml")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::ProjectName;

/// Directories `init` creates at the workspace root.
pub const BASE_DIRS: [&str; 5] = ["data", "models", "configs", "scripts", "src"];

/// Roots that hold a per-project subtree. `delete` walks exactly these.
pub const PROJECT_ROOTS: [&str; 3] = ["data", "models", "configs"];

/// File name of the current-project marker.
pub const MARKER_FILE: &str = ".openssme_project";

/// File name of the optional workspace settings.
pub const SETTINGS_FILE: &str = "opensem.toml";

pub const TRAIN_CONFIG: &str = "train_config.yaml";
pub const EVAL_CONFIG: &str = "eval_config.yaml";
pub const DATA_CONFIG: &str = "data_config.yaml";

/// Path routing rooted at a single workspace directory.
///
/// # Invariants
///
/// - Every project path is `<root>/<base>/<project>[/...]`
/// - Project names are validated, so joins cannot leave the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    root: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // =========================================================================
    // Workspace-scoped paths
    // =========================================================================

    pub fn data_root(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn models_root(&self) -> PathBuf {
        self.root.join("models")
    }

    pub fn configs_root(&self) -> PathBuf {
        self.root.join("configs")
    }

    /// All directories created by `init`.
    pub fn base_dirs(&self) -> Vec<PathBuf> {
        BASE_DIRS.iter().map(|d| self.root.join(d)).collect()
    }

    pub fn marker_path(&self) -> PathBuf {
        self.root.join(MARKER_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Resolve a user-supplied path against the workspace root.
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    // =========================================================================
    // Project-scoped paths
    // =========================================================================

    /// `data/<project>` - the directory whose presence means "project exists".
    pub fn project_data_dir(&self, project: &ProjectName) -> PathBuf {
        self.data_root().join(project)
    }

    pub fn raw_dir(&self, project: &ProjectName) -> PathBuf {
        self.project_data_dir(project).join("raw")
    }

    pub fn processed_dir(&self, project: &ProjectName) -> PathBuf {
        self.project_data_dir(project).join("processed")
    }

    pub fn golden_dir(&self, project: &ProjectName) -> PathBuf {
        self.project_data_dir(project).join("golden")
    }

    pub fn project_models_dir(&self, project: &ProjectName) -> PathBuf {
        self.models_root().join(project)
    }

    pub fn adapters_dir(&self, project: &ProjectName) -> PathBuf {
        self.project_models_dir(project).join("adapters")
    }

    pub fn project_configs_dir(&self, project: &ProjectName) -> PathBuf {
        self.configs_root().join(project)
    }

    pub fn data_config_path(&self, project: &ProjectName) -> PathBuf {
        self.project_configs_dir(project).join(DATA_CONFIG)
    }

    /// Every directory `new` creates for a project, parents implied.
    pub fn project_skeleton(&self, project: &ProjectName) -> Vec<PathBuf> {
        vec![
            self.raw_dir(project),
            self.processed_dir(project),
            self.golden_dir(project),
            self.adapters_dir(project),
            self.project_configs_dir(project),
        ]
    }

    /// The per-project subtree under each of [`PROJECT_ROOTS`].
    pub fn project_subtrees(&self, project: &ProjectName) -> Vec<PathBuf> {
        PROJECT_ROOTS
            .iter()
            .map(|base| self.root.join(base).join(project))
            .collect()
    }
}
