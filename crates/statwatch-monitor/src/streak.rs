//! Consecutive-failure tracking for the polling loop.

use statwatch_core::constants::UNREACHABLE_STREAK_THRESHOLD;

/// Health of the endpoint as seen by the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakState {
    /// Last cycle succeeded (or no cycle has run yet).
    Healthy,
    /// `count` consecutive cycles have failed.
    Degraded { count: u32 },
}

/// Failure streak state: how many cycles in a row have failed, and whether
/// the unreachable alert has already fired for this run of failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureStreak {
    count: u32,
    reported: bool,
}

impl FailureStreak {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consecutive failures since the last success.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the unreachable alert fired during the current streak.
    pub fn reported(&self) -> bool {
        self.reported
    }

    pub fn state(&self) -> StreakState {
        match self.count {
            0 => StreakState::Healthy,
            count => StreakState::Degraded { count },
        }
    }

    /// Record a successful cycle. Clears the streak and re-arms the alert.
    /// Returns the length of the streak that just ended (0 if there was none).
    pub fn record_success(&mut self) -> u32 {
        let ended = self.count;
        self.count = 0;
        self.reported = false;
        ended
    }

    /// Record a failed cycle. Returns `true` exactly once per streak: on the
    /// failure that brings the count to the alert threshold.
    pub fn record_failure(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        if self.count >= UNREACHABLE_STREAK_THRESHOLD && !self.reported {
            self.reported = true;
            return true;
        }
        false
    }
}
