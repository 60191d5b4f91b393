//! Top-level statwatch configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EndpointConfig, ObservabilityConfig, PollConfig};
use crate::errors::ConfigError;

/// File name looked up in the working directory by the agent.
pub const PROJECT_CONFIG_FILE: &str = "statwatch.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Config file (`statwatch.toml`), when present
/// 2. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatwatchConfig {
    pub endpoint: EndpointConfig,
    pub poll: PollConfig,
    pub observability: ObservabilityConfig,
}

impl StatwatchConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. The result is validated either way.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &StatwatchConfig) -> Result<(), ConfigError> {
        let url = config.endpoint.url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "endpoint.url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                field: "endpoint.url".to_string(),
                message: "must start with http:// or https://".to_string(),
            });
        }
        if config.endpoint.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "endpoint.request_timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.poll.interval_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "poll.interval_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
