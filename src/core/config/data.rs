//! core::config::data
//!
//! Per-project data config (`configs/<project>/data_config.yaml`).
//!
//! The data config is an open YAML mapping. Only a handful of keys mean
//! anything to the dispatcher; the rest ride along untouched so that a
//! forge can read whatever it needs.
//!
//! | key                  | meaning                                   |
//! |----------------------|-------------------------------------------|
//! | `forge_class`        | dotted forge identifier                   |
//! | `params`             | mapping handed to the forge as-is         |
//! | `raw_data_dir`       | input directory (default `data/<p>/raw`)  |
//! | `processed_data_dir` | output directory (default `data/<p>/processed`) |
//!
//! # Loading
//!
//! A missing or unreadable file is soft: [`DataConfig::load`] returns an
//! empty mapping together with a warning. A file that is present but not
//! valid YAML, or whose top level is not a mapping, is a hard
//! [`ConfigError::ParseError`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use super::ConfigError;
use crate::core::paths::WorkspacePaths;
use crate::core::types::ProjectName;

/// Forge used when `forge_class` is absent.
pub const DEFAULT_FORGE_CLASS: &str = "opensem.forge.TextForge";

/// Teacher model written into freshly created data configs.
pub const DEFAULT_TEACHER_MODEL: &str = "gpt-4o-mini";

pub const KEY_FORGE_CLASS: &str = "forge_class";
pub const KEY_PARAMS: &str = "params";
pub const KEY_RAW_DATA_DIR: &str = "raw_data_dir";
pub const KEY_PROCESSED_DATA_DIR: &str = "processed_data_dir";

/// Render the default `data_config.yaml` written by `new`.
pub fn default_data_config(project: &ProjectName) -> String {
    format!(
        "# Data Forge Configuration for {project}\n\
         forge_class: \"{DEFAULT_FORGE_CLASS}\"\n\
         params:\n  teacher_model: \"{DEFAULT_TEACHER_MODEL}\"\n"
    )
}

/// A project's data config mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataConfig {
    values: Mapping,
}

/// Result of [`DataConfig::load`].
#[derive(Debug, Clone)]
pub struct DataConfigLoad {
    pub config: DataConfig,
    /// Set when the file was missing or unreadable and defaults were used.
    pub warning: Option<String>,
}

impl DataConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mapping(values: Mapping) -> Self {
        Self { values }
    }

    /// Load a data config, falling back to an empty mapping if the file is
    /// missing or cannot be read.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the file exists but is not a
    /// YAML mapping.
    pub fn load(path: &Path) -> Result<DataConfigLoad, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                let warning = if e.kind() == ErrorKind::NotFound {
                    format!("config file not found: {}. Using defaults.", path.display())
                } else {
                    format!(
                        "config file {} could not be read ({e}). Using defaults.",
                        path.display()
                    )
                };
                tracing::warn!(path = %path.display(), error = %e, "data config unavailable");
                return Ok(DataConfigLoad {
                    config: Self::new(),
                    warning: Some(warning),
                });
            }
        };

        let config = Self::parse(path, &contents)?;
        Ok(DataConfigLoad {
            config,
            warning: None,
        })
    }

    /// Parse YAML text. `path` is only used for error messages.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match value {
            // An empty document (or only comments) is an empty config.
            Value::Null => Ok(Self::new()),
            Value::Mapping(values) => Ok(Self::from_mapping(values)),
            other => Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                message: format!(
                    "expected a mapping at the top level, found {}",
                    value_kind(&other)
                ),
            }),
        }
    }

    /// Fill in `raw_data_dir` / `processed_data_dir` when absent, and resolve
    /// relative values against the workspace root.
    pub fn apply_defaults(&mut self, paths: &WorkspacePaths, project: &ProjectName) {
        self.default_dir(KEY_RAW_DATA_DIR, paths, paths.raw_dir(project));
        self.default_dir(KEY_PROCESSED_DATA_DIR, paths, paths.processed_dir(project));
    }

    fn default_dir(&mut self, key: &str, paths: &WorkspacePaths, default: PathBuf) {
        let resolved = match self.values.get(key) {
            None | Some(Value::Null) => default,
            Some(Value::String(s)) => paths.resolve(s),
            // Non-string values are left for the forge to reject.
            Some(_) => return,
        };
        self.values.insert(
            Value::String(key.to_string()),
            Value::String(resolved.to_string_lossy().into_owned()),
        );
    }

    /// The configured forge identifier.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `forge_class` is present but
    /// not a string.
    pub fn forge_class(&self) -> Result<&str, ConfigError> {
        match self.values.get(KEY_FORGE_CLASS) {
            None | Some(Value::Null) => Ok(DEFAULT_FORGE_CLASS),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(ConfigError::InvalidValue(format!(
                "{KEY_FORGE_CLASS} must be a string, found {}",
                value_kind(other)
            ))),
        }
    }

    pub fn raw_data_dir(&self) -> Option<PathBuf> {
        self.get_str(KEY_RAW_DATA_DIR).map(PathBuf::from)
    }

    pub fn processed_data_dir(&self) -> Option<PathBuf> {
        self.get_str(KEY_PROCESSED_DATA_DIR).map(PathBuf::from)
    }

    /// The opaque `params` mapping, if present.
    pub fn params(&self) -> Option<&Mapping> {
        self.values.get(KEY_PARAMS).and_then(Value::as_mapping)
    }

    /// A string entry of `params`.
    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params()?.get(key)?.as_str()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key)?.as_str()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(Value::String(key.to_string()), value.into());
    }

    /// The full mapping.
    pub fn values(&self) -> &Mapping {
        &self.values
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
