//! forge
//!
//! Pluggable data forges, selected by a dotted class path.
//!
//! # Architecture
//!
//! The [`Forge`] trait defines the interface every forge implements.
//! Commands resolve forges through [`ForgeRegistry`] rather than importing
//! specific implementations directly.
//!
//! # Modules
//!
//! - `traits`: Core `Forge` trait, report and error types
//! - `factory`: Class-path registry and forge creation
//! - [`text`]: Built-in `opensem.forge.TextForge`
//! - [`mock`]: Mock implementation for deterministic testing
//! - [`dispatch`]: The `run-forge` pipeline
//!
//! # Example
//!
//! ```no_run
//! use opensem::core::paths::WorkspacePaths;
//! use opensem::core::types::ProjectName;
//! use opensem::forge::{dispatch, ForgeRegistry};
//!
//! let paths = WorkspacePaths::new("/path/to/workspace");
//! let project = ProjectName::new("demo").unwrap();
//! let run = dispatch::run_forge(&paths, &project, &ForgeRegistry::with_builtins()).unwrap();
//! println!("{} wrote {} records", run.forge_class, run.report.records);
//! ```

pub mod dispatch;
mod factory;
pub mod mock;
pub mod text;
mod traits;

pub use dispatch::{DispatchError, ForgeRun};
pub use factory::{ForgeConstructor, ForgeRegistry};
pub use text::TextForge;
pub use traits::*;
