//! Calendar-day helpers
//!
//! All record dates are plain calendar days (`NaiveDate`); "today" is the
//! UTC calendar day. `NaiveDate` ordering coincides with lexicographic
//! ordering of the ISO `YYYY-MM-DD` form, so range queries need no
//! special casing.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Today's calendar day (UTC).
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// First day of the current calendar month (UTC).
pub fn month_start() -> NaiveDate {
    month_start_of(today())
}

/// First day of the month containing `day`.
pub fn month_start_of(day: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap()
}

/// An inclusive date range for record queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Month-to-date: the first of the current month through today.
    pub fn month_to_date() -> Self {
        Self::new(month_start(), today())
    }

    /// Inclusive on both ends.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}
