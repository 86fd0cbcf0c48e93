//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--root <path>`: Workspace root (else `$OPENSEM_ROOT`, else the current directory)
//! - `--debug`: Enable debug logging
//! - `--no-interactive`: Never prompt
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// OpenSEM - manage SEM project workspaces and run data forges
#[derive(Parser, Debug)]
#[command(name = "opensem")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root (defaults to $OPENSEM_ROOT, then the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Prompts are allowed unless `--no-interactive` or `--quiet` was set.
    pub fn interactive(&self) -> bool {
        !(self.no_interactive || self.quiet)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the workspace and its environment
    #[command(
        name = "init",
        long_about = "Initialize the workspace and its environment.\n\n\
            Creates the base directories (data, models, configs, scripts, src) \
            under the workspace root, then makes sure the configured environment \
            exists. If it does not, the environment manager (conda by default) \
            creates it and installs the requirements file into it.\n\n\
            Environment settings are read from opensem.toml in the workspace \
            root when present.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Set up a fresh workspace in the current directory
    opensem init

    # Only create directories; manage the environment yourself
    opensem init --no-env"
    )]
    Init {
        /// Create directories only; skip the environment manager
        #[arg(long)]
        no_env: bool,
    },

    /// Create a new SEM project and make it current
    #[command(
        name = "new",
        long_about = "Create a new SEM project and make it the current project.\n\n\
            Creates data/<name>/{raw,processed,golden}, models/<name>/adapters \
            and configs/<name> with default train, eval and data configs. \
            Existing config files are never overwritten, so running new twice \
            is safe.",
        after_help = "\
WORKFLOW EXAMPLES:
    opensem new sentiment
    opensem add-data ./corpus/*.txt
    opensem run-forge"
    )]
    New {
        /// Project name (letters, digits, '_', '-', '.')
        name: String,
    },

    /// List SEM projects in the workspace
    #[command(name = "list-projects")]
    ListProjects {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which parts of a project exist
    #[command(name = "status")]
    Status {
        /// Project to inspect
        project: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy files into a project's raw data folder
    #[command(
        name = "add-data",
        long_about = "Copy files into a project's raw data folder.\n\n\
            Files are copied with their permissions and timestamps. A directory \
            contributes only the regular files directly inside it. Missing \
            inputs are reported and skipped; the command still copies the rest \
            and then exits with an error.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Into the current project
    opensem add-data notes.txt ./more-notes/

    # Into a specific project
    opensem add-data notes.txt --project sentiment"
    )]
    AddData {
        /// Files or directories to copy
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Target project (defaults to current)
        #[arg(long)]
        project: Option<String>,
    },

    /// Run the configured data forge for a project
    #[command(
        name = "run-forge",
        long_about = "Run the configured data forge for a project.\n\n\
            Reads configs/<project>/data_config.yaml, fills in raw_data_dir and \
            processed_data_dir when absent, resolves forge_class against the \
            registered forges, and runs it. The built-in forge is \
            opensem.forge.TextForge."
    )]
    RunForge {
        /// Target project (defaults to current)
        #[arg(long)]
        project: Option<String>,
    },

    /// Set the current project
    #[command(name = "set-project")]
    SetProject {
        /// Project name
        name: String,
    },

    /// Show the current project
    #[command(name = "current")]
    Current,

    /// Delete a SEM project and all its data
    #[command(
        name = "delete",
        long_about = "Delete a SEM project and all its data.\n\n\
            Removes data/<name>, models/<name> and configs/<name>. Asks for \
            confirmation unless --yes is given. If the project is current, the \
            current project is cleared.",
        after_help = "\
WORKFLOW EXAMPLES:
    opensem delete old-experiment

    # Scripts
    opensem --no-interactive delete old-experiment --yes"
    )]
    Delete {
        /// Project name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for opensem commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    opensem completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    opensem completion zsh >> ~/.zshrc

    # Fish
    opensem completion fish > ~/.config/fish/completions/opensem.fish

    # PowerShell
    opensem completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_data_requires_files() {
        assert!(Cli::try_parse_from(["opensem", "add-data"]).is_err());
        let cli = Cli::try_parse_from(["opensem", "add-data", "a", "b", "--project", "p"]).unwrap();
        match cli.command {
            Command::AddData { files, project } => {
                assert_eq!(files, vec![PathBuf::from("a"), PathBuf::from("b")]);
                assert_eq!(project.as_deref(), Some("p"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["opensem", "current", "--root", "/ws", "-q"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/ws")));
        assert!(cli.quiet);
        assert!(!cli.interactive());
    }

    #[test]
    fn interactive_by_default() {
        let cli = Cli::try_parse_from(["opensem", "delete", "p"]).unwrap();
        assert!(cli.interactive());
        let cli = Cli::try_parse_from(["opensem", "--no-interactive", "delete", "p", "--yes"]).unwrap();
        assert!(!cli.interactive());
    }
}
