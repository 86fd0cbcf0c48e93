//! forge::traits
//!
//! Forge trait definition for turning raw project data into processed data.
//!
//! # Design
//!
//! A forge is built from a project's [`DataConfig`] and then run exactly
//! once. Construction and execution are separate fallible steps so the
//! dispatcher can report which one failed. Forges receive the full config
//! mapping, including keys only they understand.
//!
//! # Example
//!
//! ```
//! use opensem::core::config::DataConfig;
//! use opensem::forge::{Forge, ForgeError, ForgeReport};
//!
//! struct CountKeys(usize);
//!
//! impl Forge for CountKeys {
//!     fn name(&self) -> &str {
//!         "CountKeys"
//!     }
//!
//!     fn run(&mut self) -> Result<ForgeReport, ForgeError> {
//!         Ok(ForgeReport::records(self.0))
//!     }
//! }
//!
//! let config = DataConfig::new();
//! let mut forge = CountKeys(config.values().len());
//! assert_eq!(forge.run().unwrap().records, 0);
//! ```
//!
//! [`DataConfig`]: crate::core::config::DataConfig

use std::path::PathBuf;

use thiserror::Error;

/// Errors from forge resolution, construction and execution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForgeError {
    /// `forge_class` is not of the form `<module>.<Class>`.
    #[error("invalid forge class '{0}': expected '<module>.<Class>'")]
    InvalidClassPath(String),

    /// No forges are registered under this module.
    #[error("forge module '{0}' not found")]
    ModuleNotFound(String),

    /// The module exists but has no such class.
    #[error("forge class '{class}' not found in module '{module}'")]
    ClassNotFound { module: String, class: String },

    /// Registering the same identifier twice.
    #[error("forge '{0}' is already registered")]
    AlreadyRegistered(String),

    /// The constructor rejected the config.
    #[error("failed to construct forge '{forge}': {message}")]
    Construction { forge: String, message: String },

    /// `run()` failed.
    #[error("forge '{forge}' failed: {message}")]
    Execution { forge: String, message: String },
}

/// Summary returned by a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgeReport {
    /// Records produced.
    pub records: usize,
    /// Inputs skipped (with a logged warning).
    pub skipped: usize,
    /// Primary output file, if the forge wrote one.
    pub output: Option<PathBuf>,
}

impl ForgeReport {
    pub fn records(records: usize) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }
}

/// A data forge.
pub trait Forge {
    /// Display name, used in errors and logs.
    fn name(&self) -> &str;

    /// Process the configured raw data.
    fn run(&mut self) -> Result<ForgeReport, ForgeError>;
}
