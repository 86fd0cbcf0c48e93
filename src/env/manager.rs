//! env::manager
//!
//! Ensure the workspace's environment exists, via an external environment
//! manager (conda by default).
//!
//! # Steps
//!
//! 1. Locate the manager on PATH. Missing manager: stop, nothing is run.
//! 2. `<manager> env list` and look for the environment name.
//! 3. If absent: `<manager> create -y -n <name> python=<version>`, then
//!    `<manager> run -n <name> pip install -r <requirements>`.
//!
//! Every step's exit status is checked; the first failure stops the
//! sequence and is returned as [`EnvError::Failed`].

use std::path::{Path, PathBuf};

use super::traits::{display_command, EnvError, ProcessRunner};
use crate::core::config::WorkspaceConfig;
use crate::core::paths::WorkspacePaths;

/// What to ensure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSpec {
    pub manager: String,
    pub name: String,
    pub python: String,
    pub requirements: PathBuf,
}

impl EnvSpec {
    /// Build from workspace settings; `requirements` resolves against the root.
    pub fn from_settings(settings: &WorkspaceConfig, paths: &WorkspacePaths) -> Self {
        Self {
            manager: settings.manager().to_string(),
            name: settings.env_name().to_string(),
            python: settings.python().to_string(),
            requirements: paths.resolve(settings.requirements()),
        }
    }

    fn create_args(&self) -> Vec<String> {
        vec![
            "create".into(),
            "-y".into(),
            "-n".into(),
            self.name.clone(),
            format!("python={}", self.python),
        ]
    }

    fn install_args(&self) -> Vec<String> {
        vec![
            "run".into(),
            "-n".into(),
            self.name.clone(),
            "pip".into(),
            "install".into(),
            "-r".into(),
            self.requirements.to_string_lossy().into_owned(),
        ]
    }
}

/// Result of [`EnvManager::ensure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvOutcome {
    AlreadyExists,
    Created,
}

/// Drives the environment manager through a [`ProcessRunner`].
pub struct EnvManager<'a, R: ProcessRunner + ?Sized> {
    runner: &'a R,
    spec: EnvSpec,
}

impl<'a, R: ProcessRunner + ?Sized> EnvManager<'a, R> {
    pub fn new(runner: &'a R, spec: EnvSpec) -> Self {
        Self { runner, spec }
    }

    pub fn spec(&self) -> &EnvSpec {
        &self.spec
    }

    /// Locate the manager executable.
    pub fn locate(&self) -> Result<PathBuf, EnvError> {
        self.runner
            .locate(&self.spec.manager)
            .ok_or_else(|| EnvError::ManagerNotFound(self.spec.manager.clone()))
    }

    /// Make sure the environment exists, creating it if needed.
    pub fn ensure(&self) -> Result<EnvOutcome, EnvError> {
        let program = self.locate()?;

        if self.exists(&program)? {
            tracing::debug!(env = %self.spec.name, "environment already exists");
            return Ok(EnvOutcome::AlreadyExists);
        }

        tracing::info!(env = %self.spec.name, "creating environment");
        self.run_checked(&program, &self.spec.create_args())?;
        self.run_checked(&program, &self.spec.install_args())?;
        Ok(EnvOutcome::Created)
    }

    /// Whether the environment is listed by `<manager> env list`.
    pub fn exists(&self, program: &Path) -> Result<bool, EnvError> {
        let output = self.run_checked(program, &["env".to_string(), "list".to_string()])?;
        let listed = parse_env_names(&output).any(|name| name == self.spec.name);
        Ok(listed)
    }

    /// Run and require success. Returns stdout.
    fn run_checked(&self, program: &Path, args: &[String]) -> Result<String, EnvError> {
        let output = self.runner.run(program, args)?;
        if !output.success() {
            return Err(EnvError::Failed {
                command: display_command(program, args),
                status: output.status,
                stderr: output.stderr,
            });
        }
        Ok(output.stdout)
    }
}

/// Environment names from `env list` output: first column of each
/// non-comment line.
pub fn parse_env_names(listing: &str) -> impl Iterator<Item = &str> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
}
