//! forge::text
//!
//! Built-in forge: raw text files to a JSON Lines corpus.
//!
//! Each regular file directly inside `raw_data_dir` (sorted by name) becomes
//! one record:
//!
//! ```json
//! {"source":"notes.txt","sha256":"…","bytes":42,"text":"…"}
//! ```
//!
//! Files that are not valid UTF-8 are skipped with a warning. Output goes to
//! `<processed_data_dir>/<params.output_file>` (default `forged.jsonl`) and
//! is replaced on every successful run. A failed run leaves the previous
//! output untouched.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::traits::{Forge, ForgeError, ForgeReport};
use crate::core::config::data::{KEY_PROCESSED_DATA_DIR, KEY_RAW_DATA_DIR};
use crate::core::config::DataConfig;

/// Output file when `params.output_file` is absent.
pub const DEFAULT_OUTPUT_FILE: &str = "forged.jsonl";

/// `params` key naming the output file.
pub const PARAM_OUTPUT_FILE: &str = "output_file";

const NAME: &str = "TextForge";

#[derive(Debug, Serialize)]
struct Record<'a> {
    source: &'a str,
    sha256: String,
    bytes: u64,
    text: &'a str,
}

/// See the module docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextForge {
    raw_dir: PathBuf,
    processed_dir: PathBuf,
    output_file: String,
}

impl TextForge {
    /// Build from a data config with defaults already applied.
    ///
    /// # Errors
    ///
    /// `ForgeError::Construction` if either data directory is missing, or
    /// `params.output_file` is not a plain file name.
    pub fn from_config(config: &DataConfig) -> Result<Self, ForgeError> {
        let raw_dir = config
            .raw_data_dir()
            .ok_or_else(|| construction(format!("'{KEY_RAW_DATA_DIR}' is not set")))?;
        let processed_dir = config
            .processed_data_dir()
            .ok_or_else(|| construction(format!("'{KEY_PROCESSED_DATA_DIR}' is not set")))?;

        let output_file = config
            .param_str(PARAM_OUTPUT_FILE)
            .unwrap_or(DEFAULT_OUTPUT_FILE)
            .to_string();
        if !is_plain_file_name(&output_file) {
            return Err(construction(format!(
                "'params.{PARAM_OUTPUT_FILE}' must be a file name, got '{output_file}'"
            )));
        }

        Ok(Self {
            raw_dir,
            processed_dir,
            output_file,
        })
    }

    /// Registry constructor.
    pub fn boxed(config: &DataConfig) -> Result<Box<dyn Forge>, ForgeError> {
        Ok(Box::new(Self::from_config(config)?))
    }

    pub fn output_path(&self) -> PathBuf {
        self.processed_dir.join(&self.output_file)
    }

    /// Records are written here first and renamed over the output on success.
    fn staging_path(&self) -> PathBuf {
        self.processed_dir.join(format!(".{}.tmp", self.output_file))
    }

    fn inputs(&self) -> Result<Vec<PathBuf>, ForgeError> {
        let entries = fs::read_dir(&self.raw_dir).map_err(|e| {
            execution(format!(
                "cannot read raw data dir {}: {e}",
                self.raw_dir.display()
            ))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| execution(e.to_string()))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl Forge for TextForge {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&mut self) -> Result<ForgeReport, ForgeError> {
        let output = self.output_path();
        let staging = self.staging_path();
        // The previous output is never an input, even when both dirs coincide.
        let inputs: Vec<PathBuf> = self
            .inputs()?
            .into_iter()
            .filter(|path| *path != output && *path != staging)
            .collect();

        fs::create_dir_all(&self.processed_dir).map_err(|e| {
            execution(format!(
                "cannot create {}: {e}",
                self.processed_dir.display()
            ))
        })?;

        let result = write_records(&inputs, &staging).and_then(|(records, skipped)| {
            fs::rename(&staging, &output)
                .map_err(|e| execution(format!("cannot replace {}: {e}", output.display())))?;
            Ok((records, skipped))
        });
        let (records, skipped) = match result {
            Ok(counts) => counts,
            Err(e) => {
                // Leave the previous output in place.
                let _ = fs::remove_file(&staging);
                return Err(e);
            }
        };

        tracing::info!(
            records,
            skipped,
            output = %output.display(),
            "text forge finished"
        );
        Ok(ForgeReport {
            records,
            skipped,
            output: Some(output),
        })
    }
}

/// Write one JSON line per UTF-8 input to `path`. Returns (records, skipped).
fn write_records(inputs: &[PathBuf], path: &Path) -> Result<(usize, usize), ForgeError> {
    let write_err = |e: std::io::Error| execution(format!("cannot write {}: {e}", path.display()));

    let file = fs::File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let (mut records, mut skipped) = (0, 0);

    for input in inputs {
        let bytes = fs::read(input)
            .map_err(|e| execution(format!("cannot read {}: {e}", input.display())))?;
        let Ok(text) = std::str::from_utf8(&bytes) else {
            tracing::warn!(path = %input.display(), "skipping non-UTF-8 file");
            skipped += 1;
            continue;
        };

        let source = file_name(input);
        let record = Record {
            source: &source,
            sha256: hex::encode(Sha256::digest(&bytes)),
            bytes: bytes.len() as u64,
            text,
        };
        let line = serde_json::to_string(&record).map_err(|e| execution(e.to_string()))?;
        writeln!(writer, "{line}").map_err(write_err)?;
        records += 1;
    }

    writer.flush().map_err(write_err)?;
    Ok((records, skipped))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn construction(message: String) -> ForgeError {
    ForgeError::Construction {
        forge: NAME.to_string(),
        message,
    }
}

fn execution(message: String) -> ForgeError {
    ForgeError::Execution {
        forge: NAME.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::{Mapping, Value};
    use tempfile::TempDir;

    fn config(raw: &Path, processed: &Path) -> DataConfig {
        let mut config = DataConfig::new();
        config.insert(KEY_RAW_DATA_DIR, raw.to_string_lossy().into_owned());
        config.insert(KEY_PROCESSED_DATA_DIR, processed.to_string_lossy().into_owned());
        config
    }

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let dir = TempDir::new().unwrap();
        let raw = dir.path().join("raw");
        let processed = dir.path().join("processed");
        fs::create_dir_all(&raw).unwrap();
        (dir, raw, processed)
    }

    #[test]
    fn writes_one_record_per_text_file() {
        let (_dir, raw, processed) = setup();
        fs::write(raw.join("b.txt"), "second").unwrap();
        fs::write(raw.join("a.txt"), "first").unwrap();
        fs::create_dir(raw.join("nested")).unwrap();

        let mut forge = TextForge::from_config(&config(&raw, &processed)).unwrap();
        let report = forge.run().unwrap();
        assert_eq!(report.records, 2);
        assert_eq!(report.skipped, 0);

        let output = fs::read_to_string(processed.join(DEFAULT_OUTPUT_FILE)).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["source"], "a.txt");
        assert_eq!(lines[0]["text"], "first");
        assert_eq!(lines[0]["bytes"], 5);
        assert_eq!(
            lines[0]["sha256"],
            "a7937b64b8caa58f03721bb6bacf5c78cb235febe0e70b1b84cd99541461a08e"
        );
        assert_eq!(lines[1]["source"], "b.txt");
    }

    #[test]
    fn skips_binary_files() {
        let (_dir, raw, processed) = setup();
        fs::write(raw.join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(raw.join("ok.txt"), "fine").unwrap();

        let report = TextForge::from_config(&config(&raw, &processed))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.records, 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn honors_output_file_param() {
        let (_dir, raw, processed) = setup();
        let mut config = config(&raw, &processed);
        let mut params = Mapping::new();
        params.insert(
            Value::String(PARAM_OUTPUT_FILE.into()),
            Value::String("corpus.jsonl".into()),
        );
        config.insert("params", Value::Mapping(params));

        let report = TextForge::from_config(&config).unwrap().run().unwrap();
        assert_eq!(report.output, Some(processed.join("corpus.jsonl")));
        assert!(processed.join("corpus.jsonl").is_file());
    }

    #[test]
    fn rejects_output_path_traversal() {
        let (_dir, raw, processed) = setup();
        let mut config = config(&raw, &processed);
        let mut params = Mapping::new();
        params.insert(
            Value::String(PARAM_OUTPUT_FILE.into()),
            Value::String("../escape.jsonl".into()),
        );
        config.insert("params", Value::Mapping(params));

        let err = TextForge::from_config(&config).unwrap_err();
        assert!(matches!(err, ForgeError::Construction { .. }));
    }

    #[test]
    fn missing_dirs_fail_construction() {
        let err = TextForge::from_config(&DataConfig::new()).unwrap_err();
        assert!(matches!(err, ForgeError::Construction { .. }));
    }

    #[test]
    fn missing_raw_dir_fails_run() {
        let dir = TempDir::new().unwrap();
        let mut forge =
            TextForge::from_config(&config(&dir.path().join("absent"), dir.path())).unwrap();
        assert!(matches!(forge.run(), Err(ForgeError::Execution { .. })));
    }

    #[test]
    fn output_in_raw_dir_is_not_an_input() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join(DEFAULT_OUTPUT_FILE), "stale\n").unwrap();
        let mut forge = TextForge::from_config(&config(dir.path(), dir.path())).unwrap();

        for _ in 0..2 {
            let report = forge.run().unwrap();
            assert_eq!(report.records, 1);
        }
        let output = fs::read_to_string(dir.path().join(DEFAULT_OUTPUT_FILE)).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("\"source\":\"a.txt\""));
    }

    #[test]
    fn failed_replace_keeps_previous_output() {
        let (_dir, raw, processed) = setup();
        fs::write(raw.join("a.txt"), "alpha").unwrap();
        // A non-empty directory at the output path cannot be replaced.
        let blocker = processed.join(DEFAULT_OUTPUT_FILE);
        fs::create_dir_all(&blocker).unwrap();
        fs::write(blocker.join("keep"), "previous").unwrap();

        let mut forge = TextForge::from_config(&config(&raw, &processed)).unwrap();
        assert!(matches!(forge.run(), Err(ForgeError::Execution { .. })));
        assert_eq!(fs::read_to_string(blocker.join("keep")).unwrap(), "previous");
        assert!(!forge.staging_path().exists());
    }

    #[test]
    fn plain_file_names() {
        assert!(is_plain_file_name("out.jsonl"));
        assert!(!is_plain_file_name("dir/out.jsonl"));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("/abs"));
        assert!(!is_plain_file_name(""));
    }
}
