use std::time::Duration;

use statwatch_core::traits::ISleeper;

/// Blocks the calling thread. Not interruptible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl ISleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
