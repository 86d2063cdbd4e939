//! Clock port.
//!
//! Time is an injected dependency so date arithmetic is testable with a
//! fixed clock instead of wall time.

use crate::domain::foundation::{CalendarDate, Timestamp};

/// Supplies the current time.
pub trait Clock: Send + Sync {
    /// Returns the current moment.
    fn now(&self) -> Timestamp;

    /// Returns today's calendar date (UTC).
    fn today(&self) -> CalendarDate {
        self.now().date()
    }
}
