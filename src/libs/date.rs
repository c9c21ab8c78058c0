//! Calendar-date formatting for the remote task API.
//!
//! The service expects zero-padded `YYYY-MM-DD` dates on task creation and
//! a `YYYY-MM-DD HH:MM:SS` upper bound on list queries.

use chrono::{Local, NaiveDate};

/// Formats a date as a zero-padded calendar date, e.g. `2026-08-05`.
pub fn calendar_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats the inclusive end of the given day, e.g. `2026-08-05 23:59:59`.
///
/// Used as the `date` query parameter so the list contains every task whose
/// estimated date is on or before the end of that day.
pub fn end_of_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d 23:59:59").to_string()
}

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
