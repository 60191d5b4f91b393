//! Payload parse errors.

use super::error_code::{self, StatwatchErrorCode};

/// Reasons a payload could not be turned into a snapshot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("payload is empty")]
    EmptyPayload,

    #[error("expected {expected} fields, got {actual}")]
    MalformedFrame { expected: usize, actual: usize },

    #[error("field {index} is invalid: {reason}")]
    MalformedField { index: usize, reason: String },
}

impl StatwatchErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPayload => error_code::EMPTY_PAYLOAD,
            Self::MalformedFrame { .. } => error_code::MALFORMED_FRAME,
            Self::MalformedField { .. } => error_code::MALFORMED_FIELD,
        }
    }
}
