//! # statwatch-monitor
//!
//! The polling loop and everything it drives: payload parsing, threshold
//! evaluation, and the failure-streak state machine that decides when the
//! endpoint is reported unreachable.

pub mod evaluator;
pub mod events;
pub mod parser;
pub mod poller;
pub mod stats;
pub mod streak;

pub use evaluator::evaluate;
pub use parser::parse_snapshot;
pub use poller::{CycleOutcome, Poller};
pub use stats::PollerStats;
pub use streak::{FailureStreak, StreakState};
