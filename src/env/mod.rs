//! env
//!
//! External environment setup.
//!
//! # Architecture
//!
//! Commands never spawn processes directly. They build an [`EnvManager`]
//! over a [`ProcessRunner`]: [`SystemRunner`] in production, and
//! [`mock::MockRunner`] in tests.
//!
//! # Modules
//!
//! - `traits`: `ProcessRunner` trait, captured output, errors
//! - `system`: real process execution (`which` + `std::process`)
//! - `manager`: the create-if-missing environment sequence
//! - [`mock`]: scripted runner for deterministic testing

mod manager;
pub mod mock;
mod system;
mod traits;

pub use manager::{parse_env_names, EnvManager, EnvOutcome, EnvSpec};
pub use system::SystemRunner;
pub use traits::*;
