//! Structured log events for the polling loop.
//!
//! Each function emits a `tracing` event with structured fields. None of
//! these write to the alert sink.

use std::time::Duration;

/// Log the start of the polling loop.
pub fn poller_started(source: &str, interval: Duration) {
    tracing::info!(
        event = "poller_started",
        source = %source,
        interval_ms = millis(interval),
        "poller started"
    );
}

/// Log a successful cycle.
pub fn cycle_succeeded(cycle: u64, warnings: usize) {
    tracing::debug!(
        event = "cycle_succeeded",
        cycle = cycle,
        warnings = warnings,
        "cycle succeeded"
    );
}

/// Log a failed cycle with its cause. The cause never reaches the alert sink.
pub fn cycle_failed(cycle: u64, code: &str, error: &str, streak: u32) {
    tracing::debug!(
        event = "cycle_failed",
        cycle = cycle,
        code = %code,
        error = %error,
        streak = streak,
        "cycle failed"
    );
}

/// Log that a failure streak reached the alert threshold.
pub fn streak_alerted(streak: u32, failures_total: u64) {
    tracing::warn!(
        event = "streak_alerted",
        streak = streak,
        failures_total = failures_total,
        "endpoint unreachable"
    );
}

/// Log recovery after one or more failed cycles.
pub fn streak_recovered(streak: u32) {
    tracing::info!(
        event = "streak_recovered",
        streak = streak,
        "endpoint recovered"
    );
}

/// Log a breached threshold rule.
pub fn threshold_breached(rule: &str, message: &str) {
    tracing::info!(
        event = "threshold_breached",
        rule = %rule,
        message = %message,
        "threshold breached"
    );
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturates_instead_of_wrapping() {
        assert_eq!(millis(Duration::from_secs(5)), 5_000);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
