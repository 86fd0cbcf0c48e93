//! add-data command - Copy inputs into a project's raw folder

use std::path::PathBuf;

use crate::core::ingest::{ingest, IngestReport};
use crate::engine::{run_in_workspace, Context};
use crate::ui::output;
use anyhow::{bail, Result};

/// Copy `files` into `data/<project>/raw`.
///
/// The project is `project` if given, else the current project. Missing
/// and uncopyable inputs are reported and skipped; the caller decides whether an
/// incomplete report is a failure (the CLI treats it as one).
pub fn add_data(ctx: &Context, files: &[PathBuf], project: Option<&str>) -> Result<IngestReport> {
    let verbosity = ctx.verbosity();

    run_in_workspace(ctx, |ws| {
        let project = ws.resolve_project(project)?;
        let raw_dir = ws.paths.raw_dir(&project);
        if !raw_dir.is_dir() {
            bail!("Project '{project}' does not exist or raw folder missing.");
        }

        let report = ingest(&raw_dir, files)?;

        for missing in &report.missing {
            output::error(format!("File or folder not found: {}", missing.display()));
        }
        for failed in &report.failed {
            output::error(format!("Could not copy {}: {}", failed.path.display(), failed.reason));
        }
        for copied in &report.copied {
            output::print(
                format!(
                    "Copied {} to {}",
                    copied.source.display(),
                    raw_dir.display()
                ),
                verbosity,
            );
        }
        Ok(report)
    })
}
