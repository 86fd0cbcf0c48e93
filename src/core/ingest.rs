//! core::ingest
//!
//! Copy user-supplied files into a project's raw-data folder.
//!
//! # Semantics
//!
//! - A directory input contributes its immediate regular files only (no
//!   recursion, no subdirectories).
//! - A file input is copied directly.
//! - A missing input is recorded and skipped; the rest of the batch still runs.
//! - An input that cannot be read or copied is recorded as failed; the rest
//!   of the batch still runs.
//! - A file that already is its own destination is never copied onto itself.
//! - Other destinations are overwritten without warning.
//! - Copies keep permissions and access/modification times.

use std::fs::{self, File, FileTimes};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from ingesting. `MissingRawDir` stops the batch; the others are
/// per-input and end up in [`IngestReport::failed`].
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("raw data folder '{0}' does not exist")]
    MissingRawDir(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy '{from}' to '{to}': {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("'{0}' is already in the raw data folder")]
    SameFile(PathBuf),
}

/// A single completed copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// An input that exists but was not copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedInput {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of an ingest batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub copied: Vec<CopiedFile>,
    /// Inputs that did not exist.
    pub missing: Vec<PathBuf>,
    /// Inputs that could not be read or copied.
    pub failed: Vec<FailedInput>,
}

impl IngestReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }

    fn fail(&mut self, path: &Path, error: IngestError) {
        tracing::warn!(path = %path.display(), error = %error, "input not copied");
        self.failed.push(FailedInput {
            path: path.to_path_buf(),
            reason: error.to_string(),
        });
    }
}

/// Copy `inputs` into `raw_dir`.
///
/// # Errors
///
/// `IngestError::MissingRawDir` before anything is copied if `raw_dir` is
/// not a directory. Every other problem is recorded per input in the report.
pub fn ingest<P: AsRef<Path>>(raw_dir: &Path, inputs: &[P]) -> Result<IngestReport, IngestError> {
    if !raw_dir.is_dir() {
        return Err(IngestError::MissingRawDir(raw_dir.to_path_buf()));
    }

    let mut report = IngestReport::default();

    for input in inputs {
        let input = input.as_ref();
        let meta = match fs::metadata(input) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %input.display(), "input not found, skipping");
                report.missing.push(input.to_path_buf());
                continue;
            }
            Err(e) => {
                report.fail(
                    input,
                    IngestError::Read {
                        path: input.to_path_buf(),
                        source: e,
                    },
                );
                continue;
            }
        };

        let files = if meta.is_dir() {
            match regular_files(input) {
                Ok(files) => files,
                Err(e) => {
                    report.fail(input, e);
                    continue;
                }
            }
        } else {
            vec![input.to_path_buf()]
        };

        for file in files {
            match copy_into(&file, raw_dir) {
                Ok(copied) => report.copied.push(copied),
                Err(e) => report.fail(&file, e),
            }
        }
    }

    tracing::debug!(
        copied = report.copied.len(),
        missing = report.missing.len(),
        failed = report.failed.len(),
        "ingest finished"
    );
    Ok(report)
}

/// Immediate regular-file children of `dir`, sorted for stable output.
fn regular_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let read_err = |e| IngestError::Read {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        // Follows symlinks, like the file inputs themselves.
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Copy one file into `dest_dir`, keeping its name and metadata.
fn copy_into(source: &Path, dest_dir: &Path) -> Result<CopiedFile, IngestError> {
    let copy_err = |to: &Path, e| IngestError::Copy {
        from: source.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    };

    let file_name = source.file_name().ok_or_else(|| {
        copy_err(
            dest_dir,
            std::io::Error::new(ErrorKind::InvalidInput, "input has no file name"),
        )
    })?;
    let destination = dest_dir.join(file_name);

    // fs::copy truncates the destination before reading the source.
    if is_same_file(source, &destination) {
        return Err(IngestError::SameFile(source.to_path_buf()));
    }

    // std::fs::copy carries permission bits over.
    fs::copy(source, &destination).map_err(|e| copy_err(&destination, e))?;
    preserve_times(source, &destination).map_err(|e| copy_err(&destination, e))?;

    tracing::debug!(from = %source.display(), to = %destination.display(), "copied");
    Ok(CopiedFile {
        source: source.to_path_buf(),
        destination,
    })
}

/// Whether both paths name the same file on disk. A destination that does
/// not exist yet is never the same file.
#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn preserve_times(source: &Path, destination: &Path) -> std::io::Result<()> {
    let meta = fs::metadata(source)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    // Read-only handle: the copy may carry read-only permissions.
    File::open(destination)?.set_times(times)
}
