use std::time::Duration;

/// Suspends the polling loop between cycles.
pub trait ISleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}
