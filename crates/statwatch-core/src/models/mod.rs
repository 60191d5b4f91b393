//! Data models passed between the poller, the evaluator, and the alert sink.

pub mod alert;
pub mod snapshot;

pub use alert::{Alert, Warning};
pub use snapshot::Snapshot;
