//! forge::dispatch
//!
//! `run-forge` pipeline: load config, apply defaults, resolve, construct, run.
//!
//! # Steps
//!
//! 1. [`prepare`]: read `configs/<project>/data_config.yaml`. A missing or
//!    unreadable file yields an empty config plus a warning; malformed YAML
//!    is an error. `raw_data_dir` / `processed_data_dir` are then defaulted.
//! 2. [`dispatch`]: resolve `forge_class` in the registry, construct the
//!    forge with the full mapping, and run it once.
//!
//! Nothing touches the data directories until a forge has been resolved and
//! constructed.

use thiserror::Error;

use super::factory::ForgeRegistry;
use super::traits::{ForgeError, ForgeReport};
use crate::core::config::{ConfigError, DataConfig, DataConfigLoad};
use crate::core::paths::WorkspacePaths;
use crate::core::types::ProjectName;

/// Errors from the full pipeline.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Forge(#[from] ForgeError),
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeRun {
    /// The class path that was run.
    pub forge_class: String,
    /// The forge's own name for itself.
    pub forge: String,
    pub report: ForgeReport,
}

/// Load the project's data config and apply directory defaults.
pub fn prepare(
    paths: &WorkspacePaths,
    project: &ProjectName,
) -> Result<DataConfigLoad, ConfigError> {
    let mut loaded = DataConfig::load(&paths.data_config_path(project))?;
    loaded.config.apply_defaults(paths, project);
    Ok(loaded)
}

/// Resolve, construct and run the configured forge.
pub fn dispatch(registry: &ForgeRegistry, config: &DataConfig) -> Result<ForgeRun, DispatchError> {
    let forge_class = config.forge_class()?.trim().to_string();
    tracing::debug!(forge = %forge_class, "resolving forge");

    let mut forge = registry.create(&forge_class, config)?;
    let name = forge.name().to_string();
    tracing::info!(forge = %name, class = %forge_class, "running forge");
    let report = forge.run()?;

    Ok(ForgeRun {
        forge_class,
        forge: name,
        report,
    })
}

/// [`prepare`] then [`dispatch`]. Any warning from loading is logged only.
pub fn run_forge(
    paths: &WorkspacePaths,
    project: &ProjectName,
    registry: &ForgeRegistry,
) -> Result<ForgeRun, DispatchError> {
    let loaded = prepare(paths, project)?;
    dispatch(registry, &loaded.config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::data::{KEY_PROCESSED_DATA_DIR, KEY_RAW_DATA_DIR};
    use crate::forge::mock::{FailOn, MockForge};
    use std::fs;
    use tempfile::TempDir;

    fn setup(data_config: Option<&str>) -> (TempDir, WorkspacePaths, ProjectName) {
        let dir = TempDir::new().unwrap();
        let paths = WorkspacePaths::new(dir.path());
        let project = ProjectName::new("demo").unwrap();
        fs::create_dir_all(paths.project_configs_dir(&project)).unwrap();
        if let Some(contents) = data_config {
            fs::write(paths.data_config_path(&project), contents).unwrap();
        }
        (dir, paths, project)
    }

    fn registry_with(mock: &MockForge) -> ForgeRegistry {
        let mut registry = ForgeRegistry::new();
        registry.register("tests.forges.Mock", mock.constructor()).unwrap();
        registry
    }

    #[test]
    fn missing_config_warns_and_defaults() {
        let (_dir, paths, project) = setup(None);
        let loaded = prepare(&paths, &project).unwrap();
        assert!(loaded.warning.is_some());
        assert_eq!(
            loaded.config.raw_data_dir(),
            Some(paths.raw_dir(&project))
        );
        assert_eq!(
            loaded.config.processed_data_dir(),
            Some(paths.processed_dir(&project))
        );
    }

    #[test]
    fn passes_full_mapping_to_forge() {
        let (_dir, paths, project) = setup(Some(
            "forge_class: tests.forges.Mock\nextra: kept\nparams:\n  k: v\n",
        ));
        let mock = MockForge::new().with_records(4);
        let run = run_forge(&paths, &project, &registry_with(&mock)).unwrap();

        assert_eq!(run.forge_class, "tests.forges.Mock");
        assert_eq!(run.forge, "MockForge");
        assert_eq!(run.report.records, 4);

        let seen = &mock.configs()[0];
        assert_eq!(seen.get_str("extra"), Some("kept"));
        assert_eq!(seen.param_str("k"), Some("v"));
        assert!(seen.get_str(KEY_RAW_DATA_DIR).is_some());
        assert!(seen.get_str(KEY_PROCESSED_DATA_DIR).is_some());
    }

    #[test]
    fn unknown_forge_runs_nothing() {
        let (_dir, paths, project) = setup(Some("forge_class: tests.forges.Other\n"));
        let mock = MockForge::new();
        let err = run_forge(&paths, &project, &registry_with(&mock)).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Forge(ForgeError::ClassNotFound { .. })
        ));
        assert_eq!(mock.runs(), 0);
        assert!(!paths.processed_dir(&project).exists());
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let (_dir, paths, project) = setup(Some("forge_class: [unclosed\n"));
        let err = run_forge(&paths, &project, &ForgeRegistry::with_builtins()).unwrap_err();
        assert!(matches!(err, DispatchError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn run_failure_is_returned() {
        let (_dir, paths, project) = setup(Some("forge_class: tests.forges.Mock\n"));
        let mock = MockForge::new().fail_on(FailOn::Run("exploded".into()));
        let err = run_forge(&paths, &project, &registry_with(&mock)).unwrap_err();
        assert!(err.to_string().contains("exploded"));
    }

    #[test]
    fn default_forge_processes_raw_data() {
        let (_dir, paths, project) = setup(None);
        fs::create_dir_all(paths.raw_dir(&project)).unwrap();
        fs::write(paths.raw_dir(&project).join("a.txt"), "hello").unwrap();

        let run = run_forge(&paths, &project, &ForgeRegistry::with_builtins()).unwrap();
        assert_eq!(run.report.records, 1);
        assert!(paths.processed_dir(&project).join("forged.jsonl").is_file());
    }
}
