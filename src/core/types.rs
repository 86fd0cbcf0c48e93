//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ProjectName`] - Validated SEM project name
//! - [`ClassPath`] - Dotted forge identifier split into module and class
//!
//! # Validation
//!
//! These types enforce validity at construction time. A `ProjectName` is
//! always safe to join onto a workspace directory, so no path built from
//! one can escape the workspace root.
//!
//! # Examples
//!
//! ```
//! use opensem::core::types::{ClassPath, ProjectName};
//!
//! let name = ProjectName::new("sentiment-v2").unwrap();
//! assert_eq!(name.as_str(), "sentiment-v2");
//!
//! let class = ClassPath::parse("opensem.forge.TextForge").unwrap();
//! assert_eq!(class.module(), "opensem.forge");
//! assert_eq!(class.class(), "TextForge");
//!
//! assert!(ProjectName::new("../escape").is_err());
//! assert!(ClassPath::parse("NoModule").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid forge class path '{0}': expected '<module>.<Class>'")]
    InvalidClassPath(String),
}

/// Maximum accepted project name length.
pub const MAX_PROJECT_NAME_LEN: usize = 128;

/// A validated SEM project name.
///
/// Project names become directory names under `data/`, `models/` and
/// `configs/`, so they are restricted to:
/// - ASCII letters, digits, `_`, `-` and `.`
/// - at most [`MAX_PROJECT_NAME_LEN`] characters
/// - no leading `.` or `-` (rules out `.`, `..` and flag-like names)
///
/// # Example
///
/// ```
/// use opensem::core::types::ProjectName;
///
/// assert!(ProjectName::new("qa_bot").is_ok());
/// assert!(ProjectName::new("v1.2").is_ok());
///
/// assert!(ProjectName::new("").is_err());
/// assert!(ProjectName::new(".hidden").is_err());
/// assert!(ProjectName::new("a/b").is_err());
/// assert!(ProjectName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a new validated project name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidProjectName` if the name is not filesystem-safe.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        let reject = |reason: &str| {
            Err(TypeError::InvalidProjectName {
                name: name.to_string(),
                reason: reason.to_string(),
            })
        };

        if name.is_empty() {
            return reject("name cannot be empty");
        }
        if name.len() > MAX_PROJECT_NAME_LEN {
            return reject("name is too long");
        }
        if name.starts_with('.') {
            return reject("name cannot start with '.'");
        }
        if name.starts_with('-') {
            return reject("name cannot start with '-'");
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
        {
            return reject(&format!(
                "character {c:?} is not allowed (use letters, digits, '_', '-', '.')"
            ));
        }

        Ok(())
    }

    /// Get the project name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<std::path::Path> for ProjectName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProjectName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A dotted forge identifier such as `opensem.forge.TextForge`.
///
/// The string is split on its *last* `.`: everything before is the module,
/// the remainder is the class. Both halves must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassPath {
    full: String,
    split: usize,
}

impl ClassPath {
    /// Parse a dotted class path.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidClassPath` when there is no `.` or either
    /// side of the last `.` is empty.
    pub fn parse(path: &str) -> Result<Self, TypeError> {
        let path = path.trim();
        match path.rfind('.') {
            Some(idx) if idx > 0 && idx + 1 < path.len() => Ok(Self {
                full: path.to_string(),
                split: idx,
            }),
            _ => Err(TypeError::InvalidClassPath(path.to_string())),
        }
    }

    /// Module half, e.g. `opensem.forge`.
    pub fn module(&self) -> &str {
        &self.full[..self.split]
    }

    /// Class half, e.g. `TextForge`.
    pub fn class(&self) -> &str {
        &self.full[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ClassPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full)
    }
}
