//! forge::factory
//!
//! Forge selection and creation.
//!
//! # Design
//!
//! This module is the single place where a `forge_class` string becomes a
//! forge instance. Commands go through [`ForgeRegistry`] instead of naming
//! forge implementations directly.
//!
//! # Resolution
//!
//! A class path such as `opensem.forge.TextForge` is split on its last `.`
//! into a module (`opensem.forge`) and a class (`TextForge`). The module is
//! looked up first, then the class within it, so the two failure modes are
//! reported separately.
//!
//! # Example
//!
//! ```
//! use opensem::core::config::DataConfig;
//! use opensem::forge::{ForgeError, ForgeRegistry};
//!
//! let registry = ForgeRegistry::with_builtins();
//! assert!(registry.contains("opensem.forge.TextForge"));
//!
//! let err = registry
//!     .create("acme.forge.Missing", &DataConfig::new())
//!     .err()
//!     .unwrap();
//! assert!(matches!(err, ForgeError::ModuleNotFound(_)));
//! ```

use std::collections::BTreeMap;

use super::text::TextForge;
use super::traits::{Forge, ForgeError};
use crate::core::config::data::DEFAULT_FORGE_CLASS;
use crate::core::config::DataConfig;
use crate::core::types::ClassPath;

/// Builds a forge from a project's data config.
pub type ForgeConstructor = Box<dyn Fn(&DataConfig) -> Result<Box<dyn Forge>, ForgeError>>;

/// Registered forges, keyed by module then class.
#[derive(Default)]
pub struct ForgeRegistry {
    modules: BTreeMap<String, BTreeMap<String, ForgeConstructor>>,
}

impl std::fmt::Debug for ForgeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForgeRegistry")
            .field("forges", &self.names())
            .finish()
    }
}

impl ForgeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in forges.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // The built-in name is a constant and cannot collide in a fresh registry.
        let _ = registry.register(DEFAULT_FORGE_CLASS, TextForge::boxed);
        registry
    }

    /// Register `constructor` under a dotted class path.
    ///
    /// # Errors
    ///
    /// - `ForgeError::InvalidClassPath` if `class_path` has no module part
    /// - `ForgeError::AlreadyRegistered` if the identifier is taken
    pub fn register<F>(&mut self, class_path: &str, constructor: F) -> Result<(), ForgeError>
    where
        F: Fn(&DataConfig) -> Result<Box<dyn Forge>, ForgeError> + 'static,
    {
        let path = parse_class_path(class_path)?;
        let classes = self.modules.entry(path.module().to_string()).or_default();
        if classes.contains_key(path.class()) {
            return Err(ForgeError::AlreadyRegistered(path.to_string()));
        }
        classes.insert(path.class().to_string(), Box::new(constructor));
        tracing::debug!(forge = %path, "registered forge");
        Ok(())
    }

    /// Look up the constructor for a class path.
    pub fn resolve(&self, class_path: &str) -> Result<&ForgeConstructor, ForgeError> {
        let path = parse_class_path(class_path)?;
        let classes = self
            .modules
            .get(path.module())
            .ok_or_else(|| ForgeError::ModuleNotFound(path.module().to_string()))?;
        classes
            .get(path.class())
            .ok_or_else(|| ForgeError::ClassNotFound {
                module: path.module().to_string(),
                class: path.class().to_string(),
            })
    }

    /// Resolve and construct in one step.
    pub fn create(
        &self,
        class_path: &str,
        config: &DataConfig,
    ) -> Result<Box<dyn Forge>, ForgeError> {
        let constructor = self.resolve(class_path)?;
        constructor(config)
    }

    pub fn contains(&self, class_path: &str) -> bool {
        self.resolve(class_path).is_ok()
    }

    /// All registered identifiers, sorted.
    pub fn names(&self) -> Vec<String> {
        self.modules
            .iter()
            .flat_map(|(module, classes)| {
                classes.keys().map(move |class| format!("{module}.{class}"))
            })
            .collect()
    }
}

fn parse_class_path(class_path: &str) -> Result<ClassPath, ForgeError> {
    ClassPath::parse(class_path).map_err(|_| ForgeError::InvalidClassPath(class_path.to_string()))
}
