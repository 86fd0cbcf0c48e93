//! engine
//!
//! Orchestrates the command lifecycle: Open -> Handle -> Save.
//!
//! # Architecture
//!
//! Every workspace command runs inside [`runner::run_in_workspace`]:
//!
//! ```text
//! Open (paths + marker) -> Handler -> Save marker -> Return
//! ```
//!
//! The current-project marker is read once on open and written once after
//! the handler returns, whether or not the handler succeeded. Handlers only
//! change the in-memory [`ProjectContext`](crate::core::context::ProjectContext).
//!
//! # Invariants
//!
//! - Commands never read or write the marker file directly
//! - A handler error is reported even if saving the marker also fails

pub mod runner;
pub mod workspace;

pub use runner::run_in_workspace;
pub use workspace::{Workspace, WorkspaceError};

use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Environment variable naming the workspace root.
pub const ROOT_ENV: &str = "OPENSEM_ROOT";

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Workspace root override (`--root` or `$OPENSEM_ROOT`).
    pub root: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            root: None,
            debug: false,
            quiet: false,
            interactive: true,
        }
    }
}

impl Context {
    /// Context for a workspace at `root`, non-interactive. Used by tests and
    /// library callers.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            interactive: false,
            ..Self::default()
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The workspace root: the override if set, else the current directory.
    pub fn workspace_root(&self) -> std::io::Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod context {
        use super::*;

        #[test]
        fn default_values() {
            let ctx = Context::default();
            assert!(ctx.root.is_none());
            assert!(!ctx.debug);
            assert!(!ctx.quiet);
            assert!(ctx.interactive);
            assert_eq!(ctx.verbosity(), Verbosity::Normal);
        }

        #[test]
        fn for_root_is_non_interactive() {
            let ctx = Context::for_root("/ws");
            assert_eq!(ctx.workspace_root().unwrap(), PathBuf::from("/ws"));
            assert!(!ctx.interactive);
        }

        #[test]
        fn no_root_uses_current_dir() {
            let ctx = Context::default();
            assert_eq!(
                ctx.workspace_root().unwrap(),
                std::env::current_dir().unwrap()
            );
        }
    }
}
