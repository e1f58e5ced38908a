//! In-memory record store
//!
//! Map-backed implementation of the domain's [`RecordStore`] port.
//! Each call takes the lock once, so individual reads and writes are
//! atomic; callers serialize multi-call operations against the same
//! policy themselves.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use core_kernel::{ContactId, InvoiceId, PolicyId};
use domain_accounting::{
    Contact, Invoice, InvoiceQuery, Payment, Policy, PolicyCancellation, RecordStore, StoreError,
};

#[derive(Default)]
struct Records {
    policies: HashMap<PolicyId, Policy>,
    contacts: HashMap<ContactId, Contact>,
    invoices: HashMap<InvoiceId, Invoice>,
    payments: Vec<Payment>,
    cancellations: HashMap<PolicyId, PolicyCancellation>,
}

/// An in-memory [`RecordStore`]
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Records>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring search over policy numbers.
    ///
    /// An adapter-level query for thin lookup layers; the accounting
    /// core itself only ever fetches policies by id.
    pub fn search_policies(&self, pattern: &str) -> Result<Vec<Policy>, StoreError> {
        let needle = pattern.to_lowercase();
        let records = self.read()?;

        let mut matches: Vec<Policy> = records
            .policies
            .values()
            .filter(|policy| policy.policy_number.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.policy_number.cmp(&b.policy_number));

        Ok(matches)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("record store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("record store lock poisoned".into()))
    }
}

impl RecordStore for InMemoryStore {
    fn policy(&self, id: PolicyId) -> Result<Policy, StoreError> {
        self.read()?
            .policies
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("policy", id))
    }

    fn insert_policy(&self, policy: Policy) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if records.policies.contains_key(&policy.id) {
            return Err(StoreError::Conflict(format!(
                "policy {} already exists",
                policy.id
            )));
        }
        records.policies.insert(policy.id, policy);
        Ok(())
    }

    fn update_policy(&self, policy: &Policy) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if !records.policies.contains_key(&policy.id) {
            return Err(StoreError::not_found("policy", policy.id));
        }
        records.policies.insert(policy.id, policy.clone());
        Ok(())
    }

    fn contact(&self, id: ContactId) -> Result<Contact, StoreError> {
        self.read()?
            .contacts
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("contact", id))
    }

    fn insert_contact(&self, contact: Contact) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if records.contacts.contains_key(&contact.id) {
            return Err(StoreError::Conflict(format!(
                "contact {} already exists",
                contact.id
            )));
        }
        records.contacts.insert(contact.id, contact);
        Ok(())
    }

    fn invoices(
        &self,
        policy_id: PolicyId,
        query: &InvoiceQuery,
    ) -> Result<Vec<Invoice>, StoreError> {
        let records = self.read()?;

        let mut invoices: Vec<Invoice> = records
            .invoices
            .values()
            .filter(|invoice| invoice.policy_id == policy_id && query.matches(invoice))
            .cloned()
            .collect();
        invoices.sort_by_key(|invoice| (invoice.bill_date, invoice.id));

        Ok(invoices)
    }

    fn insert_invoice(&self, invoice: Invoice) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if records.invoices.contains_key(&invoice.id) {
            return Err(StoreError::Conflict(format!(
                "invoice {} already exists",
                invoice.id
            )));
        }
        records.invoices.insert(invoice.id, invoice);
        Ok(())
    }

    fn mark_invoice_deleted(&self, id: InvoiceId) -> Result<(), StoreError> {
        let mut records = self.write()?;
        match records.invoices.get_mut(&id) {
            Some(invoice) => {
                invoice.deleted = true;
                Ok(())
            }
            None => Err(StoreError::not_found("invoice", id)),
        }
    }

    fn payments(
        &self,
        policy_id: PolicyId,
        on_or_before: Option<NaiveDate>,
    ) -> Result<Vec<Payment>, StoreError> {
        let records = self.read()?;

        Ok(records
            .payments
            .iter()
            .filter(|payment| payment.policy_id == policy_id)
            .filter(|payment| on_or_before.map_or(true, |cutoff| payment.transaction_date <= cutoff))
            .cloned()
            .collect())
    }

    fn insert_payment(&self, payment: Payment) -> Result<(), StoreError> {
        self.write()?.payments.push(payment);
        Ok(())
    }

    fn cancellation(&self, policy_id: PolicyId) -> Result<Option<PolicyCancellation>, StoreError> {
        Ok(self.read()?.cancellations.get(&policy_id).cloned())
    }

    fn insert_cancellation(&self, cancellation: PolicyCancellation) -> Result<(), StoreError> {
        let mut records = self.write()?;
        if records.cancellations.contains_key(&cancellation.policy_id) {
            return Err(StoreError::Conflict(format!(
                "policy {} already has a cancellation",
                cancellation.policy_id
            )));
        }
        records
            .cancellations
            .insert(cancellation.policy_id, cancellation);
        Ok(())
    }
}
