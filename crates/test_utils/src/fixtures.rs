//! Pre-built test fixtures
//!
//! Consistent, predictable values for unit tests. The calendar
//! anchors match the demo book of business: policies effective at
//! the start of 2015.

use chrono::NaiveDate;

/// Builds a calendar date, panicking on invalid components.
///
/// Test-only convenience; production code goes through
/// `core_kernel::temporal`.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {}-{}-{}", year, month, day))
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy effective date (Jan 1, 2015)
    pub fn effective_date() -> NaiveDate {
        ymd(2015, 1, 1)
    }

    /// First due date for a policy effective Jan 1, 2015
    pub fn first_due_date() -> NaiveDate {
        ymd(2015, 2, 1)
    }

    /// First cancel date for a policy effective Jan 1, 2015
    pub fn first_cancel_date() -> NaiveDate {
        ymd(2015, 2, 15)
    }
}

/// Fixture for premium amounts
pub struct PremiumFixtures;

impl PremiumFixtures {
    /// A premium dividing evenly by every supported schedule
    pub fn divisible() -> i64 {
        1200
    }

    /// A premium leaving a remainder under monthly proration
    pub fn with_remainder() -> i64 {
        1000
    }
}
