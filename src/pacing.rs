//! Inter-request pacing for the pagination loop.
use std::thread;
use std::time::Duration;

/// Default pause between page requests.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Decides how long to wait between consecutive page requests.
pub trait Pacer {
    fn pause(&mut self);
}

/// Blocks the calling thread for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_PAGE_DELAY)
    }
}

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

/// Never waits. For tests and offline replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}
