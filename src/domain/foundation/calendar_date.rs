//! Calendar date value object for day-precision dates.
//!
//! Subscription expiry is a calendar date with no time component, and
//! extensions use calendar-month arithmetic: the day-of-month is preserved
//! where the target month has that day, otherwise clamped to the target
//! month's last day (Jan 31 + 1 month = Feb 28/29).

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Immutable calendar date, no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month, and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a valid calendar date", year, month, day),
                )
            })
    }

    /// Creates a date from a NaiveDate.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Adds calendar months, clamping the day to the target month's length.
    pub fn add_months(&self, months: u32) -> Self {
        Self(self.0 + Months::new(months))
    }

    /// Checks if this date is before another.
    pub fn is_before(&self, other: &CalendarDate) -> bool {
        self.0 < other.0
    }

    /// Checks if this date is after another.
    pub fn is_after(&self, other: &CalendarDate) -> bool {
        self.0 > other.0
    }

    /// Number of whole days from `other` to this date (negative if earlier).
    pub fn days_since(&self, other: &CalendarDate) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn from_ymd_rejects_invalid_dates() {
        assert!(CalendarDate::from_ymd(2025, 2, 30).is_err());
        assert!(CalendarDate::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn add_months_preserves_day_when_possible() {
        assert_eq!(date(2025, 6, 1).add_months(3), date(2025, 9, 1));
        assert_eq!(date(2025, 1, 15).add_months(1), date(2025, 2, 15));
    }

    #[test]
    fn add_months_clamps_to_end_of_shorter_month() {
        assert_eq!(date(2025, 1, 31).add_months(1), date(2025, 2, 28));
        assert_eq!(date(2024, 1, 31).add_months(1), date(2024, 2, 29));
        assert_eq!(date(2025, 3, 31).add_months(1), date(2025, 4, 30));
    }

    #[test]
    fn add_months_crosses_year_boundary() {
        assert_eq!(date(2025, 11, 30).add_months(3), date(2026, 2, 28));
        assert_eq!(date(2025, 12, 31).add_months(12), date(2026, 12, 31));
    }

    #[test]
    fn display_formats_iso() {
        assert_eq!(date(2025, 6, 1).to_string(), "2025-06-01");
    }

    #[test]
    fn ordering_works() {
        assert!(date(2025, 6, 1).is_before(&date(2025, 9, 1)));
        assert!(date(2025, 9, 1).is_after(&date(2025, 6, 1)));
        assert_eq!(date(2025, 9, 1).days_since(&date(2025, 8, 31)), 1);
    }

    proptest! {
        #[test]
        fn add_months_always_moves_forward(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            months in 1u32..=120,
        ) {
            let start = date(year, month, day);
            let end = start.add_months(months);
            prop_assert!(end.is_after(&start));
        }

        #[test]
        fn add_months_lands_in_expected_month(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=31,
            months in 1u32..=24,
        ) {
            // Skip day/month combinations that are not valid dates.
            if let Ok(start) = CalendarDate::from_ymd(year, month, day) {
                let end = start.add_months(months);
                let total = (month - 1) + months;
                let expected_month = total % 12 + 1;
                let expected_year = year + (total / 12) as i32;
                prop_assert_eq!(end.as_naive().month(), expected_month);
                prop_assert_eq!(end.as_naive().year(), expected_year);
                prop_assert!(end.as_naive().day() <= start.as_naive().day());
            }
        }

        #[test]
        fn add_months_is_additive_for_safe_days(
            year in 2000i32..2090,
            month in 1u32..=12,
            day in 1u32..=28,
            a in 1u32..=12,
            b in 1u32..=12,
        ) {
            // Days 1-28 exist in every month, so no clamping occurs and
            // month addition composes.
            let start = date(year, month, day);
            prop_assert_eq!(start.add_months(a).add_months(b), start.add_months(a + b));
        }
    }
}
