//! Configuration system for statwatch.
//! TOML-based: an optional `statwatch.toml` layered over compiled defaults.
//! Threshold limits are constants and deliberately absent here.

pub mod defaults;
pub mod endpoint_config;
pub mod observability_config;
pub mod poll_config;
pub mod statwatch_config;

pub use endpoint_config::EndpointConfig;
pub use observability_config::ObservabilityConfig;
pub use poll_config::PollConfig;
pub use statwatch_config::{StatwatchConfig, PROJECT_CONFIG_FILE};
