//! Engine façade tests

use std::sync::Arc;

use chrono::NaiveDate;

use core_kernel::{ContactId, InvoiceId, PolicyId};
use domain_accounting::{
    AccountingError, BillingSchedule, CancellationReason, Contact, Invoice, InvoiceQuery, Payment,
    Policy, PolicyAccounting, PolicyCancellation, PolicyStatus, RecordStore, StoreError,
};
use infra_store::InMemoryStore;
use test_utils::{store_with_policy, ymd, PolicyBuilder};

/// Store that rejects every policy update, for exercising failure
/// ordering in multi-write operations.
struct UpdateFailsStore {
    inner: InMemoryStore,
}

impl UpdateFailsStore {
    fn new() -> Self {
        Self {
            inner: InMemoryStore::new(),
        }
    }
}

impl RecordStore for UpdateFailsStore {
    fn policy(&self, id: PolicyId) -> Result<Policy, StoreError> {
        self.inner.policy(id)
    }

    fn insert_policy(&self, policy: Policy) -> Result<(), StoreError> {
        self.inner.insert_policy(policy)
    }

    fn update_policy(&self, _policy: &Policy) -> Result<(), StoreError> {
        Err(StoreError::Internal("policy updates disabled".into()))
    }

    fn contact(&self, id: ContactId) -> Result<Contact, StoreError> {
        self.inner.contact(id)
    }

    fn insert_contact(&self, contact: Contact) -> Result<(), StoreError> {
        self.inner.insert_contact(contact)
    }

    fn invoices(
        &self,
        policy_id: PolicyId,
        query: &InvoiceQuery,
    ) -> Result<Vec<Invoice>, StoreError> {
        self.inner.invoices(policy_id, query)
    }

    fn insert_invoice(&self, invoice: Invoice) -> Result<(), StoreError> {
        self.inner.insert_invoice(invoice)
    }

    fn mark_invoice_deleted(&self, id: InvoiceId) -> Result<(), StoreError> {
        self.inner.mark_invoice_deleted(id)
    }

    fn payments(
        &self,
        policy_id: PolicyId,
        on_or_before: Option<NaiveDate>,
    ) -> Result<Vec<Payment>, StoreError> {
        self.inner.payments(policy_id, on_or_before)
    }

    fn insert_payment(&self, payment: Payment) -> Result<(), StoreError> {
        self.inner.insert_payment(payment)
    }

    fn cancellation(&self, policy_id: PolicyId) -> Result<Option<PolicyCancellation>, StoreError> {
        self.inner.cancellation(policy_id)
    }

    fn insert_cancellation(&self, cancellation: PolicyCancellation) -> Result<(), StoreError> {
        self.inner.insert_cancellation(cancellation)
    }
}

#[test]
fn test_open_fails_with_not_found_for_unknown_policy() {
    let store = Arc::new(InMemoryStore::new());
    let result = PolicyAccounting::open(store, PolicyId::new());

    match result {
        Err(err) => assert!(err.is_not_found(), "expected NotFound, got {err}"),
        Ok(_) => panic!("expected NotFound"),
    }
}

#[test]
fn test_open_generates_invoices_on_first_use() {
    let harness = store_with_policy(
        PolicyBuilder::new().with_billing_schedule(BillingSchedule::Monthly),
    );
    assert!(harness
        .store
        .invoices(harness.policy_id, &InvoiceQuery::active())
        .unwrap()
        .is_empty());

    PolicyAccounting::open(harness.store.clone(), harness.policy_id).unwrap();

    let active = harness
        .store
        .invoices(harness.policy_id, &InvoiceQuery::active())
        .unwrap();
    assert_eq!(active.len(), 12);
}

#[test]
fn test_reopening_does_not_regenerate() {
    let harness = store_with_policy(
        PolicyBuilder::new().with_billing_schedule(BillingSchedule::Quarterly),
    );
    PolicyAccounting::open(harness.store.clone(), harness.policy_id).unwrap();
    PolicyAccounting::open(harness.store.clone(), harness.policy_id).unwrap();

    let all = harness
        .store
        .invoices(
            harness.policy_id,
            &InvoiceQuery {
                include_deleted: true,
                ..InvoiceQuery::default()
            },
        )
        .unwrap();
    assert_eq!(all.len(), 4, "second open must not touch invoices");
}

#[test]
fn test_open_surfaces_generation_failure() {
    let harness = store_with_policy(
        PolicyBuilder::new().with_billing_schedule(BillingSchedule::SemiAnnual),
    );
    let result = PolicyAccounting::open(harness.store.clone(), harness.policy_id);

    assert!(matches!(
        result,
        Err(AccountingError::InvalidBillingSchedule { .. })
    ));
}

#[test]
fn test_payment_defaults_to_named_insured() {
    let harness = store_with_policy(PolicyBuilder::new());
    let engine = PolicyAccounting::open(harness.store.clone(), harness.policy_id).unwrap();

    let payment = engine
        .record_payment(None, Some(ymd(2015, 2, 1)), 400)
        .unwrap();

    assert_eq!(payment.contact_id, harness.insured_id);
    assert_eq!(payment.policy_id, harness.policy_id);
    assert_eq!(payment.amount_paid, 400);
    assert_eq!(payment.transaction_date, ymd(2015, 2, 1));
}

#[test]
fn test_payment_honors_explicit_payer() {
    let harness = store_with_policy(PolicyBuilder::new());
    let engine = PolicyAccounting::open(harness.store.clone(), harness.policy_id).unwrap();

    let payment = engine
        .record_payment(Some(harness.agent_id), Some(ymd(2015, 2, 1)), 50)
        .unwrap();

    assert_eq!(payment.contact_id, harness.agent_id);
}

#[test]
fn test_payment_without_any_payer_is_rejected() {
    // a policy with no named insured on file
    let store = Arc::new(InMemoryStore::new());
    let policy = PolicyBuilder::new().build();
    let policy_id = policy.id;
    store.insert_policy(policy).unwrap();

    let engine = PolicyAccounting::open(store, policy_id).unwrap();
    let result = engine.record_payment(None, Some(ymd(2015, 2, 1)), 100);

    assert!(matches!(
        result,
        Err(AccountingError::NoPayerOnRecord { .. })
    ));
}

#[test]
fn test_payments_are_appended_not_replaced() {
    let harness = store_with_policy(PolicyBuilder::new());
    let engine = PolicyAccounting::open(harness.store.clone(), harness.policy_id).unwrap();

    engine.record_payment(None, Some(ymd(2015, 2, 1)), 100).unwrap();
    engine.record_payment(None, Some(ymd(2015, 3, 1)), 100).unwrap();

    let payments = harness.store.payments(harness.policy_id, None).unwrap();
    assert_eq!(payments.len(), 2);
}

#[test]
fn test_failed_status_update_writes_no_cancellation_record() {
    let store = Arc::new(UpdateFailsStore::new());
    let policy = PolicyBuilder::new().build();
    let policy_id = policy.id;
    store.insert_policy(policy).unwrap();

    let mut engine = PolicyAccounting::open(store.clone(), policy_id).unwrap();
    let result = engine.cancel(CancellationReason::Client, Some(ymd(2015, 6, 1)), None);

    assert!(matches!(
        result,
        Err(AccountingError::Store(StoreError::Internal(_)))
    ));
    // neither write landed
    assert!(store.cancellation(policy_id).unwrap().is_none());
    assert_eq!(store.policy(policy_id).unwrap().status, PolicyStatus::Active);
    assert_eq!(engine.policy().status, PolicyStatus::Active);
}

#[test]
fn test_record_serialization_lists_schema_fields() {
    let harness = store_with_policy(PolicyBuilder::new());
    let engine = PolicyAccounting::open(harness.store.clone(), harness.policy_id).unwrap();
    let payment = engine
        .record_payment(None, Some(ymd(2015, 2, 1)), 400)
        .unwrap();

    let json = serde_json::to_value(&payment).unwrap();
    for field in ["id", "policy_id", "contact_id", "amount_paid", "transaction_date"] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(json["amount_paid"], 400);
    assert_eq!(json["transaction_date"], "2015-02-01");
}
