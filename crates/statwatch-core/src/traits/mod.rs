//! Collaborator traits the poller is generic over.

pub mod alert_sink;
pub mod sleeper;
pub mod stats_source;

pub use alert_sink::IAlertSink;
pub use sleeper::ISleeper;
pub use stats_source::IStatsSource;
