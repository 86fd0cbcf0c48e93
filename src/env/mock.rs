//! env::mock
//!
//! Scripted process runner for deterministic testing.
//!
//! # Example
//!
//! ```
//! use opensem::env::mock::MockRunner;
//! use opensem::env::ProcessRunner;
//! use std::path::Path;
//!
//! let runner = MockRunner::new()
//!     .with_program("conda")
//!     .respond("env list", 0, "base  /opt/conda\n");
//!
//! let out = runner
//!     .run(Path::new("/usr/bin/conda"), &["env".into(), "list".into()])
//!     .unwrap();
//! assert!(out.success());
//! assert_eq!(runner.calls(), vec!["env list".to_string()]);
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::traits::{EnvError, ExitCode, ProcessOutput, ProcessRunner};

/// Mock runner. Responses are matched by argument prefix; calls are recorded.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping, so clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    inner: Arc<Mutex<MockRunnerInner>>,
}

#[derive(Debug, Default)]
struct MockRunnerInner {
    programs: HashSet<String>,
    responses: Vec<(String, ProcessOutput)>,
    calls: Vec<String>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` locatable as `/usr/bin/<program>`.
    pub fn with_program(self, program: &str) -> Self {
        self.lock().programs.insert(program.to_string());
        self
    }

    /// Respond to calls whose joined args start with `args_prefix`.
    ///
    /// Unmatched calls succeed with empty output.
    pub fn respond(self, args_prefix: &str, code: i32, stdout: &str) -> Self {
        self.lock().responses.push((
            args_prefix.to_string(),
            ProcessOutput {
                status: ExitCode::Code(code),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        ));
        self
    }

    /// Joined argument lists of every call, in order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockRunnerInner> {
        // A poisoned lock only happens after a panicking test.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ProcessRunner for MockRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.lock()
            .programs
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }

    fn run(&self, _program: &Path, args: &[String]) -> Result<ProcessOutput, EnvError> {
        let joined = args.join(" ");
        let mut inner = self.lock();
        inner.calls.push(joined.clone());

        let response = inner
            .responses
            .iter()
            .find(|(prefix, _)| joined.starts_with(prefix.as_str()))
            .map(|(_, out)| out.clone())
            .unwrap_or(ProcessOutput {
                status: ExitCode::Code(0),
                stdout: String::new(),
                stderr: String::new(),
            });
        Ok(response)
    }
}
