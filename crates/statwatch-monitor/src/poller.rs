//! [`Poller`] — owns the failure streak and drives fetch → parse →
//! evaluate → sleep, forever.

use std::time::Duration;

use statwatch_core::errors::{CycleError, StatwatchErrorCode};
use statwatch_core::models::{Alert, Snapshot, Warning};
use statwatch_core::traits::{IAlertSink, ISleeper, IStatsSource};
use statwatch_core::StatwatchConfig;

use crate::evaluator::evaluate;
use crate::events;
use crate::parser::parse_snapshot;
use crate::stats::PollerStats;
use crate::streak::FailureStreak;

/// What happened during one cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The payload parsed; `warnings` were emitted to the sink in order.
    Success { warnings: Vec<Warning> },
    /// The cycle failed. `streak` is the consecutive-failure count after
    /// this cycle; `alerted` is true if this cycle emitted the unreachable alert.
    Failure {
        error: CycleError,
        streak: u32,
        alerted: bool,
    },
}

impl CycleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Single-threaded polling loop over injectable collaborators.
pub struct Poller<S, K, Z> {
    source: S,
    sink: K,
    sleeper: Z,
    interval: Duration,
    streak: FailureStreak,
    stats: PollerStats,
}

impl<S, K, Z> Poller<S, K, Z>
where
    S: IStatsSource,
    K: IAlertSink,
    Z: ISleeper,
{
    pub fn new(source: S, sink: K, sleeper: Z, interval: Duration) -> Self {
        Self {
            source,
            sink,
            sleeper,
            interval,
            streak: FailureStreak::new(),
            stats: PollerStats::new(),
        }
    }

    /// Create a poller using the configured poll interval.
    pub fn from_config(source: S, sink: K, sleeper: Z, config: &StatwatchConfig) -> Self {
        Self::new(source, sink, sleeper, config.poll.interval())
    }

    /// Run one cycle without sleeping.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        let cycle = self.stats.begin_cycle();
        let span = tracing::info_span!("statwatch.poll_cycle", cycle = cycle);
        let _guard = span.enter();

        match self.fetch_snapshot() {
            Ok(snapshot) => {
                let warnings = evaluate(&snapshot);
                for warning in &warnings {
                    events::threshold_breached(warning.rule(), &warning.to_string());
                    let alert: Alert = (*warning).into();
                    self.sink.emit(&alert);
                }

                let ended = self.streak.record_success();
                if ended > 0 {
                    events::streak_recovered(ended);
                }
                self.stats.record_success(warnings.len());
                events::cycle_succeeded(cycle, warnings.len());

                CycleOutcome::Success { warnings }
            }
            Err(error) => {
                let alerted = self.streak.record_failure();
                self.stats.record_failure();
                events::cycle_failed(
                    cycle,
                    error.error_code(),
                    &error.to_string(),
                    self.streak.count(),
                );

                if alerted {
                    events::streak_alerted(self.streak.count(), self.stats.failures);
                    self.sink.emit(&Alert::Unreachable);
                    self.stats.record_unreachable_alert();
                }

                CycleOutcome::Failure {
                    error,
                    streak: self.streak.count(),
                    alerted,
                }
            }
        }
    }

    /// Run one cycle, then sleep for the poll interval.
    pub fn tick(&mut self) -> CycleOutcome {
        let outcome = self.run_cycle();
        self.sleeper.sleep(self.interval);
        outcome
    }

    /// Poll forever. There is no stop signal; the loop ends with the process.
    pub fn run(&mut self) -> ! {
        events::poller_started(&self.source.describe(), self.interval);
        loop {
            self.tick();
        }
    }

    fn fetch_snapshot(&self) -> Result<Snapshot, CycleError> {
        let payload = self.source.fetch()?;
        Ok(parse_snapshot(&payload)?)
    }

    pub fn streak(&self) -> &FailureStreak {
        &self.streak
    }

    pub fn stats(&self) -> &PollerStats {
        &self.stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sleeper(&self) -> &Z {
        &self.sleeper
    }
}
