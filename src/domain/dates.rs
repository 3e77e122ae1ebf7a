//! Local calendar-date helpers
//!
//! The store and streak engine never read the wall clock; callers inject
//! "today" and "yesterday" so every code path can be tested with fixed
//! dates. These helpers exist for the embedding presentation layer, which
//! does need the host's local calendar.

use chrono::{Duration, Local, NaiveDate};

/// Today's date in the host's local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The calendar day immediately before the given date
pub fn yesterday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}
