//! Error handling for statwatch.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod cycle_error;
pub mod error_code;
pub mod fetch_error;
pub mod parse_error;

pub use config_error::ConfigError;
pub use cycle_error::CycleError;
pub use error_code::StatwatchErrorCode;
pub use fetch_error::FetchError;
pub use parse_error::ParseError;
