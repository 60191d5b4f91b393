//! Running counters for the polling loop. In memory only; reset on restart.

use chrono::{DateTime, Utc};

/// Totals accumulated since the poller was created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollerStats {
    pub cycles: u64,
    pub successes: u64,
    pub failures: u64,
    pub unreachable_alerts: u64,
    pub warnings: u64,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_failure_at: Option<DateTime<Utc>>,
}

impl PollerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, returning its 1-based number.
    pub fn begin_cycle(&mut self) -> u64 {
        self.cycles += 1;
        self.cycles
    }

    pub fn record_success(&mut self, warnings: usize) {
        self.successes += 1;
        self.warnings += warnings as u64;
        self.last_success_at = Some(Utc::now());
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
        self.last_failure_at = Some(Utc::now());
    }

    pub fn record_unreachable_alert(&mut self) {
        self.unreachable_alerts += 1;
    }

    /// Fraction of cycles that failed, 0.0 before the first cycle.
    pub fn failure_rate(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.failures as f64 / self.cycles as f64
    }
}
