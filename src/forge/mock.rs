//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! A [`MockForge`] is a handle to shared state. Its [`MockForge::constructor`]
//! is registered in a [`ForgeRegistry`]; every forge the registry builds
//! records the config it was given and each run, and can be told to fail at
//! construction or at run time.
//!
//! # Example
//!
//! ```
//! use opensem::core::config::DataConfig;
//! use opensem::forge::mock::MockForge;
//! use opensem::forge::ForgeRegistry;
//!
//! let mock = MockForge::new();
//! let mut registry = ForgeRegistry::new();
//! registry.register("tests.Mock", mock.constructor()).unwrap();
//!
//! let mut forge = registry.create("tests.Mock", &DataConfig::new()).unwrap();
//! forge.run().unwrap();
//!
//! assert_eq!(mock.runs(), 1);
//! assert_eq!(mock.configs().len(), 1);
//! ```
//!
//! [`ForgeRegistry`]: super::ForgeRegistry

use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{Forge, ForgeError, ForgeReport};
use crate::core::config::DataConfig;

const NAME: &str = "MockForge";

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping, so clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockForge {
    inner: Arc<Mutex<MockForgeInner>>,
}

#[derive(Debug, Default)]
struct MockForgeInner {
    /// Configs passed to the constructor, in order.
    configs: Vec<DataConfig>,
    /// Completed `run()` calls.
    runs: usize,
    /// Records reported by each successful run.
    records: usize,
    fail_on: Option<FailOn>,
}

/// Which step should fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailOn {
    /// The constructor returns `ForgeError::Construction` with this message.
    Construct(String),
    /// `run()` returns `ForgeError::Execution` with this message.
    Run(String),
}

impl MockForge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a failure.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        self.lock().fail_on = Some(fail_on);
        self
    }

    /// Records reported by each successful run.
    pub fn with_records(self, records: usize) -> Self {
        self.lock().records = records;
        self
    }

    /// Constructor suitable for [`ForgeRegistry::register`](super::ForgeRegistry::register).
    pub fn constructor(
        &self,
    ) -> impl Fn(&DataConfig) -> Result<Box<dyn Forge>, ForgeError> + 'static {
        let handle = self.clone();
        move |config: &DataConfig| {
            let mut inner = handle.lock();
            inner.configs.push(config.clone());
            if let Some(FailOn::Construct(message)) = &inner.fail_on {
                return Err(ForgeError::Construction {
                    forge: NAME.to_string(),
                    message: message.clone(),
                });
            }
            drop(inner);
            Ok(Box::new(MockForgeRun {
                handle: handle.clone(),
            }) as Box<dyn Forge>)
        }
    }

    /// Number of completed runs (successful or failed).
    pub fn runs(&self) -> usize {
        self.lock().runs
    }

    /// Configs the constructor received.
    pub fn configs(&self) -> Vec<DataConfig> {
        self.lock().configs.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockForgeInner> {
        // A poisoned lock only happens after a panicking test.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A forge built by [`MockForge::constructor`].
#[derive(Debug)]
struct MockForgeRun {
    handle: MockForge,
}

impl Forge for MockForgeRun {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&mut self) -> Result<ForgeReport, ForgeError> {
        let mut inner = self.handle.lock();
        inner.runs += 1;
        match &inner.fail_on {
            Some(FailOn::Run(message)) => Err(ForgeError::Execution {
                forge: NAME.to_string(),
                message: message.clone(),
            }),
            _ => Ok(ForgeReport::records(inner.records)),
        }
    }
}
