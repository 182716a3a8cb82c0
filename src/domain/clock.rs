//! Millisecond timestamp source.

use chrono::Utc;
use std::cell::Cell;

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

/// Source of the current time for note timestamps.
pub trait Clock {
    /// Returns the current time in epoch milliseconds.
    fn now_millis(&self) -> Millis;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Millis {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to (useful for testing).
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Sets the current time.
    pub fn set(&self, millis: Millis) {
        self.now.set(millis);
    }

    /// Moves the clock forward (or backward, for a negative delta).
    pub fn advance(&self, delta: Millis) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> Millis {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> Millis {
        (**self).now_millis()
    }
}
