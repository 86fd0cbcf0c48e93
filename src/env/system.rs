//! env::system
//!
//! [`ProcessRunner`] backed by the real operating system.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::traits::{display_command, EnvError, ProcessOutput, ProcessRunner};

/// Runs programs with `std::process::Command` and finds them with `which`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, program: &Path, args: &[String]) -> Result<ProcessOutput, EnvError> {
        tracing::debug!(command = %display_command(program, args), "spawning");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| EnvError::Spawn {
                program: program.display().to_string(),
                message: e.to_string(),
            })?;

        let result = ProcessOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(status = %result.status, "process finished");
        Ok(result)
    }
}
