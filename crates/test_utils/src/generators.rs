//! Property-based test data generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use domain_accounting::BillingSchedule;

/// Strategy for billing schedules invoicing supports
pub fn supported_schedule_strategy() -> impl Strategy<Value = BillingSchedule> {
    prop_oneof![
        Just(BillingSchedule::Annual),
        Just(BillingSchedule::TwoPay),
        Just(BillingSchedule::Quarterly),
        Just(BillingSchedule::Monthly),
    ]
}

/// Strategy for non-negative annual premiums in whole currency units
pub fn premium_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000i64
}

/// Strategy for positive payment amounts
pub fn payment_amount_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}

/// Strategy for effective dates
///
/// Days stop at 28 so month arithmetic never clamps, keeping
/// generated schedules exactly periodic.
pub fn effective_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2030i32, 1u32..=12u32, 1u32..=28u32).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day).expect("day <= 28 is always valid")
    })
}
