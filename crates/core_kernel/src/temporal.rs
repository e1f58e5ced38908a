//! Calendar-date arithmetic for billing schedules
//!
//! All billing dates are plain calendar dates with no time-of-day
//! component. Offsets are calendar offsets: adding months preserves
//! the day-of-month, clamping to the last day of shorter months, and
//! day offsets are literal day counts.

use chrono::{Days, Months, NaiveDate, Utc};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    /// A supplied date string failed to parse
    #[error("invalid date input: {input}")]
    InvalidDateInput { input: String },

    /// A calendar offset left the representable date range
    #[error("date arithmetic out of range: {base} offset by {offset}")]
    OutOfRange { base: NaiveDate, offset: String },
}

/// Returns the date `months` calendar months after `date`.
///
/// The day-of-month is preserved where possible; Jan 31 + 1 month is
/// Feb 28 (or Feb 29 in a leap year).
pub fn months_after(date: NaiveDate, months: u32) -> Result<NaiveDate, TemporalError> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| TemporalError::OutOfRange {
            base: date,
            offset: format!("{} months", months),
        })
}

/// Returns the date `days` literal days after `date`.
pub fn days_after(date: NaiveDate, days: u64) -> Result<NaiveDate, TemporalError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| TemporalError::OutOfRange {
            base: date,
            offset: format!("{} days", days),
        })
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(input: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| TemporalError::InvalidDateInput {
        input: input.to_string(),
    })
}

/// The current calendar date, used when an as-of date is not supplied.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
