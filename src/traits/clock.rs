//! Clock abstraction.
//!
//! Timers in the resize coordinator read time through this trait so tests can
//! advance a manual clock instead of sleeping.

use std::time::Instant;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current monotonic instant.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
