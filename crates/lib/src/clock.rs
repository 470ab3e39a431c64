//! Time provider abstraction
//!
//! This module provides a [`Clock`] trait that abstracts over time sources,
//! allowing production code to stamp operations with real system time while
//! tests can use controllable mock time.
//!
//! Replica clocks are not assumed to agree with each other. The merge engine only
//! ever compares two timestamps, it never relies on them being monotonic across
//! replicas.
//!
//! # Example
//!
//! ```
//! use replgraph::{Clock, SystemClock};
//!
//! let clock = SystemClock;
//! let now = clock.now();
//! assert!(now.timestamp_millis() > 0);
//! ```

use std::fmt::Debug;

use chrono::{DateTime, Utc};

#[cfg(any(test, feature = "testing"))]
use std::sync::Mutex;

/// The instant an operation was recorded at.
///
/// Nanosecond precision; serialized as RFC 3339 so that operations within the same
/// second keep their order across a snapshot round trip.
pub type Timestamp = DateTime<Utc>;

/// A time provider for stamping local operations.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current time.
    fn now(&self) -> Timestamp;

    /// Get current time as milliseconds since Unix epoch.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Production clock using real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Test clock with auto-advancing time.
///
/// This clock advances by one millisecond on each `now()` call, so consecutive
/// operations on one replica get strictly increasing timestamps. Use `hold()` to
/// freeze the clock when a test needs several operations stamped with the same
/// instant.
///
/// # Example
///
/// ```
/// use replgraph::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1000);
/// let t1 = clock.now();
/// let t2 = clock.now();
/// assert!(t2 > t1);
///
/// {
///     let _hold = clock.hold();
///     assert_eq!(clock.now(), clock.now());
/// }
/// ```
#[cfg(any(test, feature = "testing"))]
pub struct FixedClock {
    state: Mutex<FixedClockState>,
}

#[cfg(any(test, feature = "testing"))]
struct FixedClockState {
    millis: i64,
    held: bool,
}

/// RAII guard that freezes a [`FixedClock`] while held.
///
/// The clock resumes auto-advancing when this guard is dropped.
#[cfg(any(test, feature = "testing"))]
pub struct ClockHold<'a>(&'a FixedClock);

#[cfg(any(test, feature = "testing"))]
impl Drop for ClockHold<'_> {
    fn drop(&mut self) {
        self.0.state.lock().unwrap().held = false;
    }
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    /// Create a new fixed clock with the given initial time in milliseconds.
    pub fn new(millis: i64) -> Self {
        Self {
            state: Mutex::new(FixedClockState {
                millis,
                held: false,
            }),
        }
    }

    /// Hold the clock, preventing auto-advance until the guard is dropped.
    pub fn hold(&self) -> ClockHold<'_> {
        self.state.lock().unwrap().held = true;
        ClockHold(self)
    }

    /// Advance the clock by the given number of milliseconds.
    pub fn advance(&self, ms: i64) {
        self.state.lock().unwrap().millis += ms;
    }

    /// Set the clock to a specific time in milliseconds.
    pub fn set(&self, ms: i64) {
        self.state.lock().unwrap().millis = ms;
    }

    /// Get the current time in milliseconds without advancing.
    pub fn get(&self) -> i64 {
        self.state.lock().unwrap().millis
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        let millis = {
            let mut state = self.state.lock().unwrap();
            let t = state.millis;
            if !state.held {
                state.millis += 1;
            }
            t
        };
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    fn default() -> Self {
        // 2024-01-01 00:00:00 UTC
        Self::new(1704067200000)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clone for FixedClock {
    fn clone(&self) -> Self {
        // Clone creates independent clock at current value, not held
        Self::new(self.get())
    }
}

#[cfg(any(test, feature = "testing"))]
impl Debug for FixedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().unwrap();
        f.debug_struct("FixedClock")
            .field("millis", &state.millis)
            .field("held", &state.held)
            .finish()
    }
}
