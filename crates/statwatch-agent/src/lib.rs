//! # statwatch-agent
//!
//! Concrete collaborators for the polling loop: an HTTP statistics source,
//! a stdout alert sink, and a thread-blocking sleeper.

pub mod sink;
pub mod sleeper;
pub mod transport;

pub use sink::StdoutSink;
pub use sleeper::ThreadSleeper;
pub use transport::HttpStatsSource;
