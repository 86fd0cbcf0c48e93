//! env::traits
//!
//! Process execution interface.
//!
//! # Design
//!
//! Every external program the workspace manager touches goes through
//! [`ProcessRunner`]. The runner reports exit status and captured output;
//! interpreting them is the caller's job. This keeps environment setup
//! testable without the real environment manager installed.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from environment and process operations.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The environment manager is not on PATH.
    #[error("'{0}' is not installed or not in PATH")]
    ManagerNotFound(String),

    /// The process could not be started at all.
    #[error("failed to run {program}: {message}")]
    Spawn { program: String, message: String },

    /// The process ran and exited unsuccessfully.
    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: ExitCode,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Exit status of a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Code(i32),
    /// Terminated without an exit code (e.g. by a signal).
    Terminated,
}

impl ExitCode {
    pub fn success(&self) -> bool {
        matches!(self, ExitCode::Code(0))
    }
}

impl From<std::process::ExitStatus> for ExitCode {
    fn from(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitCode::Code(code),
            None => ExitCode::Terminated,
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitCode::Code(code) => write!(f, "status {code}"),
            ExitCode::Terminated => write!(f, "no status (terminated)"),
        }
    }
}

/// Captured result of running a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub status: ExitCode,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Locates and runs external programs.
pub trait ProcessRunner {
    /// Find `program` on PATH. `None` if it is not installed.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run `program` with `args` to completion.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Spawn` only if the process could not be started.
    /// A non-zero exit is reported through [`ProcessOutput::status`].
    fn run(&self, program: &Path, args: &[String]) -> Result<ProcessOutput, EnvError>;
}

/// Render a command line for messages and logs.
pub fn display_command(program: &Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_error_includes_stderr() {
        let err = EnvError::Failed {
            command: "conda create".into(),
            status: ExitCode::Code(2),
            stderr: "  boom\n".into(),
        };
        assert_eq!(err.to_string(), "`conda create` exited with status 2: boom");
    }

    #[test]
    fn failed_error_without_stderr() {
        let err = EnvError::Failed {
            command: "conda create".into(),
            status: ExitCode::Terminated,
            stderr: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "`conda create` exited with no status (terminated)"
        );
    }

    #[test]
    fn display_command_joins_args() {
        let line = display_command(
            Path::new("conda"),
            &["env".to_string(), "list".to_string()],
        );
        assert_eq!(line, "conda env list");
    }
}
