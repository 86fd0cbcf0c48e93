//! core::config::schema
//!
//! Workspace settings schema.
//!
//! Located at `<root>/opensem.toml`. Every field is optional; absent values
//! fall back to the defaults below.
//!
//! # Validation
//!
//! Values are checked after parsing so that a typo surfaces as a config
//! error rather than as a confusing environment-manager failure.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default environment manager executable.
pub const DEFAULT_MANAGER: &str = "conda";
/// Default environment name.
pub const DEFAULT_ENV_NAME: &str = "openssme";
/// Default python version for new environments.
pub const DEFAULT_PYTHON: &str = "3.10";
/// Default requirements file, relative to the workspace root.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Workspace settings.
///
/// # Example
///
/// ```toml
/// [environment]
/// manager = "mamba"
/// name = "sem-dev"
/// python = "3.11"
/// requirements = "envs/requirements.txt"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Environment manager settings
    pub environment: Option<EnvironmentConfig>,
}

impl WorkspaceConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(env) = &self.environment {
            env.validate()?;
        }
        Ok(())
    }

    /// Environment manager executable name or path.
    pub fn manager(&self) -> &str {
        self.environment
            .as_ref()
            .and_then(|e| e.manager.as_deref())
            .unwrap_or(DEFAULT_MANAGER)
    }

    /// Name of the managed environment.
    pub fn env_name(&self) -> &str {
        self.environment
            .as_ref()
            .and_then(|e| e.name.as_deref())
            .unwrap_or(DEFAULT_ENV_NAME)
    }

    /// Python version requested at environment creation.
    pub fn python(&self) -> &str {
        self.environment
            .as_ref()
            .and_then(|e| e.python.as_deref())
            .unwrap_or(DEFAULT_PYTHON)
    }

    /// Requirements file, as written in the config (may be relative).
    pub fn requirements(&self) -> &str {
        self.environment
            .as_ref()
            .and_then(|e| e.requirements.as_deref())
            .unwrap_or(DEFAULT_REQUIREMENTS)
    }
}

/// `[environment]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    pub manager: Option<String>,
    pub name: Option<String>,
    pub python: Option<String>,
    pub requirements: Option<String>,
}

impl EnvironmentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("manager", &self.manager),
            ("name", &self.name),
            ("python", &self.python),
            ("requirements", &self.requirements),
        ] {
            if let Some(v) = value {
                if v.trim().is_empty() {
                    return Err(ConfigError::InvalidValue(format!(
                        "environment.{key} cannot be empty"
                    )));
                }
            }
        }

        // The name is passed as a single argv element, but a name with
        // whitespace would never match a row of `env list` output.
        if let Some(name) = &self.name {
            if name.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue(format!(
                    "environment.name '{name}' cannot contain whitespace"
                )));
            }
        }

        Ok(())
    }
}
