//! Test doubles for the statwatch collaborator traits, plus canned payloads.
//!
//! The fakes record what the poller does to them so tests can run many
//! cycles without network I/O or wall-clock sleeps.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use statwatch_core::errors::FetchError;
use statwatch_core::models::Alert;
use statwatch_core::traits::{IAlertSink, ISleeper, IStatsSource};

/// Payload well under every threshold.
pub const HEALTHY_PAYLOAD: &str =
    "10,16000000000,8000000000,500000000000,100000000000,125000000,50000000";

/// Payload breaching the load, memory, and disk thresholds.
pub const OVERLOADED_PAYLOAD: &str =
    "45,16000000000,15000000000,500000000000,480000000000,125000000,50000000";

/// A transport-level failure as the HTTP source would report it.
pub fn transport_failure() -> FetchError {
    FetchError::Transport {
        reason: "connection refused".to_string(),
    }
}

/// Source that replays a fixed script of fetch results in order.
/// Once the script is exhausted every fetch fails with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Result<String, FetchError>>>,
    fetches: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Result<String, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fetches: Mutex::new(0),
        }
    }

    /// Source whose every fetch fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Append one payload to the end of the script.
    pub fn push_payload(&self, payload: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(payload.to_string()));
    }

    /// Append one failure to the end of the script.
    pub fn push_failure(&self, error: FetchError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

impl IStatsSource for ScriptedSource {
    fn fetch(&self) -> Result<String, FetchError> {
        *self.fetches.lock().unwrap() += 1;
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(transport_failure()))
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

/// Sink that keeps every alert it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }

    /// Alerts rendered exactly as the agent would print them.
    pub fn lines(&self) -> Vec<String> {
        self.alerts().iter().map(ToString::to_string).collect()
    }

    pub fn count_of(&self, alert: &Alert) -> usize {
        self.alerts.lock().unwrap().iter().filter(|a| *a == alert).count()
    }
}

impl IAlertSink for RecordingSink {
    fn emit(&self, alert: &Alert) {
        self.alerts.lock().unwrap().push(*alert);
    }
}

/// Sleeper that returns immediately and records each requested duration.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    /// Simulated time spent sleeping.
    pub fn total_slept(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

impl ISleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
