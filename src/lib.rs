//! OpenSEM - a CLI for managing SEM project workspaces
//!
//! OpenSEM organizes machine-learning "SEM projects" (raw data, processed
//! data, models, configs) under a workspace root, and runs a data forge
//! selected by a dotted class path in each project's data config.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`engine`] - Opens the workspace, runs a handler, saves the current project
//! - [`core`] - Domain types, paths, configs, project lifecycle, ingestion
//! - [`env`] - External environment manager driven through a process runner
//! - [`forge`] - Forge trait, class-path registry, built-in forges
//! - [`ui`] - User interaction utilities
//!
//! # Invariants
//!
//! 1. Every project path is built from a validated [`core::types::ProjectName`]
//! 2. The current-project marker is read once and written once per command
//! 3. Config files created by `new` are never overwritten
//! 4. Deletion never happens without confirmation or `--yes`

pub mod cli;
pub mod core;
pub mod engine;
pub mod env;
pub mod forge;
pub mod ui;
