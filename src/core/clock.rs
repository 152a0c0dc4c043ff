//! Injected time source for bonus decay.
//!
//! The engine never reads the system clock directly. Callers hand it a
//! [`Clock`] at construction, or pass a [`Timestamp`] explicitly to the
//! `*_at` entry points.
//!
//! ```
//! use std::time::Duration;
//! use memorize::core::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let start = clock.now();
//! clock.advance(Duration::from_secs(2));
//!
//! assert_eq!(clock.now().saturating_duration_since(start), Duration::from_secs(2));
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// A monotonic point in time, measured from an arbitrary clock origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub Duration);

impl Timestamp {
    /// Timestamp at the clock origin.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Create a timestamp from whole seconds since the origin.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Create a timestamp from milliseconds since the origin.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Time elapsed since `earlier`, or zero if `earlier` is later than `self`.
    #[must_use]
    pub fn saturating_duration_since(self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

/// Source of "now".
pub trait Clock {
    /// Current time.
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed())
    }
}

/// Hand-driven clock for tests and replays.
///
/// Clones share the same underlying time, so a test can keep one handle
/// while the engine owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute time.
    pub fn set(&self, at: Timestamp) {
        self.now.set(at.0);
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_duration_since() {
        let early = Timestamp::from_secs(2);
        let late = Timestamp::from_secs(5);

        assert_eq!(late.saturating_duration_since(early), Duration::from_secs(3));
        assert_eq!(early.saturating_duration_since(late), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_shared_handles() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_millis(1500));
        assert_eq!(clock.now(), Timestamp::from_millis(1500));

        clock.set(Timestamp::from_secs(10));
        assert_eq!(handle.now(), Timestamp::from_secs(10));
    }

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_add_duration() {
        assert_eq!(Timestamp::ZERO + Duration::from_secs(1), Timestamp::from_secs(1));
    }
}
