//! Tracing initialization. Wraps the `tracing` crate with `EnvFilter`
//! so log levels can be set per target.

pub mod setup;

pub use setup::{init_tracing, LOG_ENV_VAR};
