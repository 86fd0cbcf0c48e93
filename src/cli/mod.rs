//! cli
//!
//! Command-line interface layer for opensem.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers in [`commands`], which run inside [`crate::engine`] so the
//! current-project marker is loaded and saved in one place.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::engine::{self, ROOT_ENV};
use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let ctx = engine::Context {
        root: cli
            .root
            .clone()
            .or_else(|| std::env::var_os(ROOT_ENV).map(Into::into)),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    commands::dispatch(cli.command, &ctx)
}

/// Log to stderr at `warn` (`debug` with `--debug`), plus any `RUST_LOG` directives.
fn init_tracing(debug: bool) {
    let default = if debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(default.into());
    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
