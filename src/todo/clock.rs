use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Source of creation timestamps for the store
pub trait Clock: Send + Sync {
    /// Current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic ordering
///
/// Returns the same instant until [`ManualClock::advance`] or
/// [`ManualClock::set`] moves it.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward (or backward for a negative duration)
    pub fn advance(&self, by: Duration) {
        *self.lock() += by;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Jump to an arbitrary instant
    pub fn set(&self, at: DateTime<Utc>) {
        *self.lock() = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
