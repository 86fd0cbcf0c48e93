//! core
//!
//! Core domain types, schemas, and operations for OpenSEM.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ProjectName, ClassPath
//! - [`paths`] - Centralized path routing for the workspace layout
//! - [`config`] - Workspace settings and per-project data configs
//! - [`context`] - The current-project marker
//! - [`project`] - Project create/list/status/delete
//! - [`ingest`] - Copying inputs into a project's raw folder
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Functions here touch only the filesystem; no prompts, no printing
//! - Missing optional files are soft; malformed ones are errors

pub mod config;
pub mod context;
pub mod ingest;
pub mod paths;
pub mod project;
pub mod types;
