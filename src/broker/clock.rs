//! Monotonic time source shared by the liveness tracker and status query

use std::time::Instant;

/// Supplies "now" instants.
///
/// Production code uses [`SystemClock`]; tests inject a manual clock so that
/// elapsed time can be simulated without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Clock backed by `std::time::Instant::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub use self::manual::ManualClock;
