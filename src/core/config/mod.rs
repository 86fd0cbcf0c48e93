//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Two kinds of configuration live in a workspace:
//! - **Workspace settings**: `<root>/opensem.toml` (optional, TOML). Controls
//!   how `init` drives the environment manager.
//! - **Data configs**: `configs/<project>/data_config.yaml` (YAML). Selects
//!   and parameterizes the forge for `run-forge`. See [`data`].
//!
//! # Example
//!
//! ```no_run
//! use opensem::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("/path/to/workspace")).unwrap();
//! println!("environment: {}", config.settings.env_name());
//! ```

pub mod data;
pub mod schema;

pub use data::{DataConfig, DataConfigLoad};
pub use schema::{EnvironmentConfig, WorkspaceConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::paths::SETTINGS_FILE;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded workspace settings plus where they came from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings (defaults if no file was found)
    pub settings: WorkspaceConfig,
    /// Path the settings were read from, if any
    path: Option<PathBuf>,
}

impl Config {
    /// Load workspace settings from `<root>/opensem.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated. A missing file is not an error (defaults are used).
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(SETTINGS_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no workspace settings, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let settings: WorkspaceConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;
        settings.validate()?;

        tracing::debug!(path = %path.display(), "loaded workspace settings");
        Ok(Self {
            settings,
            path: Some(path),
        })
    }

    /// Path of the settings file that was loaded, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
