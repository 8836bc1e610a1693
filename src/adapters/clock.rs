//! Production clock.

use std::time::Instant;

use crate::traits::Clock;

/// Clock reading the real monotonic time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
