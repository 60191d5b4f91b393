//! Alert sink writing one line per alert to stdout.

use std::io::Write;

use statwatch_core::models::Alert;
use statwatch_core::traits::IAlertSink;

#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl IAlertSink for StdoutSink {
    fn emit(&self, alert: &Alert) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{alert}").and_then(|()| out.flush()) {
            tracing::error!(error = %e, alert = %alert, "failed to write alert to stdout");
        }
    }
}
