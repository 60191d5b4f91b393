//! Compiled defaults for every config field.

use crate::constants;

pub const DEFAULT_ENDPOINT_URL: &str = constants::DEFAULT_ENDPOINT_URL;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = constants::DEFAULT_POLL_INTERVAL_SECS;
pub const DEFAULT_LOG_LEVEL: &str = "info";
