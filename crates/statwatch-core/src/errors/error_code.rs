//! StatwatchErrorCode trait for structured log fields.

/// Every error enum implements this to provide a stable code string,
/// logged alongside the human-readable message.
pub trait StatwatchErrorCode {
    /// Returns the error code string (e.g., "TRANSPORT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted log string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const BAD_STATUS: &str = "BAD_STATUS";
pub const READ_ERROR: &str = "READ_ERROR";
pub const EMPTY_PAYLOAD: &str = "EMPTY_PAYLOAD";
pub const MALFORMED_FRAME: &str = "MALFORMED_FRAME";
pub const MALFORMED_FIELD: &str = "MALFORMED_FIELD";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
