//! Fetch errors raised by a statistics source.

use super::error_code::{self, StatwatchErrorCode};

/// Reasons a payload could not be retrieved from the endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("endpoint returned status {status}")]
    BadStatus { status: u16 },

    #[error("failed to read response body: {reason}")]
    Read { reason: String },
}

impl StatwatchErrorCode for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => error_code::TRANSPORT_ERROR,
            Self::BadStatus { .. } => error_code::BAD_STATUS,
            Self::Read { .. } => error_code::READ_ERROR,
        }
    }
}
