use crate::models::Alert;

/// Destination for alert lines.
pub trait IAlertSink: Send + Sync {
    /// Emit one alert as a single line of text.
    fn emit(&self, alert: &Alert);
}
