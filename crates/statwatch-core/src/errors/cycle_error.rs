//! Cycle errors: everything that turns a poll cycle into a failure.

use super::error_code::StatwatchErrorCode;
use super::{FetchError, ParseError};

/// Aggregates fetch and parse failures via `From` conversions.
/// The poller treats every variant the same way.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl StatwatchErrorCode for CycleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
        }
    }
}
