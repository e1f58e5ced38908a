//! Nonpayment cancellation tests
//!
//! A monthly policy for 1200 effective 2015-01-01 bills 100 on the
//! first of each month; each invoice is due a month after its bill
//! date and cancellable 14 days after that.

use domain_accounting::{
    AccountingError, BillingSchedule, CancellationReason, PolicyAccounting, PolicyStatus,
    RecordStore,
};
use test_utils::{store_with_policy, ymd, PolicyBuilder, PolicyHarness, TemporalFixtures};

fn monthly_engine() -> (PolicyAccounting, PolicyHarness) {
    let harness = store_with_policy(
        PolicyBuilder::new()
            .with_billing_schedule(BillingSchedule::Monthly)
            .with_annual_premium(1200),
    );
    let engine = PolicyAccounting::open(harness.store.clone(), harness.policy_id).unwrap();
    (engine, harness)
}

#[test]
fn test_not_pending_before_first_due_date() {
    let (engine, _) = monthly_engine();
    assert!(!engine
        .is_pending_cancellation_for_nonpay(Some(ymd(2015, 1, 10)))
        .unwrap());
}

#[test]
fn test_pending_on_due_date_boundary() {
    // due_date == as_of counts as past due
    let (engine, _) = monthly_engine();
    assert!(engine
        .is_pending_cancellation_for_nonpay(Some(TemporalFixtures::first_due_date()))
        .unwrap());
}

#[test]
fn test_covered_period_is_not_pending() {
    let (engine, _) = monthly_engine();
    engine
        .record_payment(None, Some(ymd(2015, 1, 15)), 100)
        .unwrap();

    assert!(!engine
        .is_pending_cancellation_for_nonpay(Some(ymd(2015, 2, 10)))
        .unwrap());
}

#[test]
fn test_pending_again_when_second_period_lapses() {
    let (engine, _) = monthly_engine();
    engine
        .record_payment(None, Some(ymd(2015, 1, 15)), 100)
        .unwrap();

    // the 100 covered January; February's invoice went past due on
    // March 1 with cumulative payments short
    assert!(engine
        .is_pending_cancellation_for_nonpay(Some(ymd(2015, 3, 10)))
        .unwrap());
}

#[test]
fn test_pending_ends_at_cancel_date() {
    let (engine, _) = monthly_engine();

    // past the first invoice's cancel date (Feb 15) the policy is no
    // longer merely pending; the second invoice is not yet due
    assert!(!engine
        .is_pending_cancellation_for_nonpay(Some(ymd(2015, 2, 20)))
        .unwrap());
    assert!(engine.should_cancel(Some(ymd(2015, 2, 20))).unwrap());
}

#[test]
fn test_should_not_cancel_before_cancel_date() {
    let (engine, _) = monthly_engine();
    assert!(!engine.should_cancel(Some(ymd(2015, 2, 14))).unwrap());
}

#[test]
fn test_should_cancel_on_cancel_date_boundary() {
    let (engine, _) = monthly_engine();
    assert!(engine
        .should_cancel(Some(TemporalFixtures::first_cancel_date()))
        .unwrap());
}

#[test]
fn test_payment_before_cancel_date_prevents_cancellation() {
    let (engine, _) = monthly_engine();
    engine
        .record_payment(None, Some(ymd(2015, 2, 10)), 200)
        .unwrap();

    // both invoices billed through Feb 15 are covered
    assert!(!engine.should_cancel(Some(ymd(2015, 2, 15))).unwrap());
}

#[test]
fn test_overpaid_policy_never_cancels() {
    let (engine, _) = monthly_engine();
    engine
        .record_payment(None, Some(ymd(2015, 1, 1)), 1200)
        .unwrap();

    assert!(!engine.should_cancel(Some(ymd(2015, 12, 31))).unwrap());
    assert!(!engine
        .is_pending_cancellation_for_nonpay(Some(ymd(2015, 12, 31)))
        .unwrap());
}

#[test]
fn test_cancel_for_nonpay_writes_record_and_flips_status() {
    let (mut engine, harness) = monthly_engine();

    let cancellation = engine
        .cancel_for_nonpay(Some(ymd(2015, 3, 1)), Some("lapsed after final notice"))
        .unwrap()
        .expect("policy should have cancelled");

    assert_eq!(cancellation.policy_id, harness.policy_id);
    assert_eq!(cancellation.reason, CancellationReason::Nonpayment);
    assert_eq!(cancellation.date, ymd(2015, 3, 1));
    assert_eq!(cancellation.notes, "lapsed after final notice");

    let stored = harness
        .store
        .cancellation(harness.policy_id)
        .unwrap()
        .expect("cancellation record persisted");
    assert_eq!(stored.reason, CancellationReason::Nonpayment);

    let policy = harness.store.policy(harness.policy_id).unwrap();
    assert_eq!(policy.status, PolicyStatus::Canceled);
}

#[test]
fn test_cancel_for_nonpay_is_none_when_decision_is_negative() {
    let (mut engine, harness) = monthly_engine();

    let outcome = engine.cancel_for_nonpay(Some(ymd(2015, 1, 20)), None).unwrap();

    assert!(outcome.is_none());
    assert!(harness.store.cancellation(harness.policy_id).unwrap().is_none());
    let policy = harness.store.policy(harness.policy_id).unwrap();
    assert_eq!(policy.status, PolicyStatus::Active);
}

#[test]
fn test_second_cancellation_is_rejected() {
    let (mut engine, _) = monthly_engine();
    engine
        .cancel(CancellationReason::Client, Some(ymd(2015, 6, 1)), None)
        .unwrap();

    let result = engine.cancel(CancellationReason::Client, Some(ymd(2015, 7, 1)), None);
    assert!(matches!(
        result,
        Err(AccountingError::AlreadyCancelled { .. })
    ));
}

#[test]
fn test_decision_does_not_apply_itself() {
    let (engine, harness) = monthly_engine();

    assert!(engine.should_cancel(Some(ymd(2015, 3, 1))).unwrap());

    // deciding writes nothing
    assert!(harness.store.cancellation(harness.policy_id).unwrap().is_none());
    let policy = harness.store.policy(harness.policy_id).unwrap();
    assert_eq!(policy.status, PolicyStatus::Active);
}
