//! # statwatch-core
//!
//! Foundation crate for the statwatch agent.
//! Defines the snapshot and alert models, collaborator traits, errors,
//! config, tracing setup, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::StatwatchConfig;
pub use errors::{CycleError, FetchError, ParseError};
pub use models::{Alert, Snapshot, Warning};
