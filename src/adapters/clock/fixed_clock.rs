//! Fixed clock adapter for deterministic tests.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Clock pinned to a configurable instant.
///
/// Intended for tests: date arithmetic becomes deterministic and expiry
/// scenarios can be replayed at any point in time.
pub struct FixedClock {
    now: RwLock<Timestamp>,
}

impl FixedClock {
    /// Creates a clock pinned to the given timestamp.
    pub fn new(now: Timestamp) -> Self {
        Self { now: RwLock::new(now) }
    }

    /// Creates a clock pinned to an RFC 3339 instant.
    ///
    /// # Panics
    ///
    /// Panics on an invalid timestamp string. Test helper only.
    pub fn at(rfc3339: &str) -> Self {
        let dt = DateTime::parse_from_rfc3339(rfc3339)
            .expect("FixedClock: invalid RFC 3339 timestamp")
            .with_timezone(&Utc);
        Self::new(Timestamp::from_datetime(dt))
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, now: Timestamp) {
        *self.now.write().expect("FixedClock: lock poisoned") = now;
    }

    /// Advances the clock by the given number of seconds.
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.write().expect("FixedClock: lock poisoned");
        *now = now.plus_secs(secs);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.read().expect("FixedClock: lock poisoned")
    }
}
