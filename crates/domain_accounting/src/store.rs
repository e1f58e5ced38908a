//! Record store port
//!
//! The accounting components do not decide how records are stored;
//! they read and write through this trait. Adapters (an in-memory
//! store for tests and demos, a database in a fuller deployment)
//! implement it. The capability is passed explicitly into each
//! component constructor rather than held as process-wide state.
//!
//! Operations are synchronous and request-scoped: the engine performs
//! one logical operation at a time against one policy's records and
//! relies on the adapter for atomicity of the individual calls.

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{ContactId, InvoiceId, PolicyId};

use crate::contact::Contact;
use crate::invoice::Invoice;
use crate::payment::Payment;
use crate::policy::{Policy, PolicyCancellation};

/// Error type for store operations
///
/// Every failure here is deterministic; there are no transient or
/// retryable classes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record was not found
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The operation conflicts with existing records
    #[error("conflict: {0}")]
    Conflict(String),

    /// The adapter itself failed
    #[error("store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns true if this error indicates a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Filter for invoice lookups
///
/// All date thresholds are inclusive. Deleted invoices are excluded
/// unless `include_deleted` is set.
#[derive(Debug, Clone, Default)]
pub struct InvoiceQuery {
    /// Only invoices with `bill_date` on or before this date
    pub billed_on_or_before: Option<NaiveDate>,
    /// Only invoices with `due_date` on or before this date
    pub due_on_or_before: Option<NaiveDate>,
    /// Only invoices with `cancel_date` on or before this date
    pub cancels_on_or_before: Option<NaiveDate>,
    /// Include soft-deleted invoices
    pub include_deleted: bool,
}

impl InvoiceQuery {
    /// All non-deleted invoices
    pub fn active() -> Self {
        Self::default()
    }

    /// Non-deleted invoices billed on or before `date`
    pub fn billed_through(date: NaiveDate) -> Self {
        Self {
            billed_on_or_before: Some(date),
            ..Self::default()
        }
    }

    /// Non-deleted invoices due on or before `date`
    pub fn due_through(date: NaiveDate) -> Self {
        Self {
            due_on_or_before: Some(date),
            ..Self::default()
        }
    }

    /// Non-deleted invoices whose cancel date is on or before `date`
    pub fn cancellable_through(date: NaiveDate) -> Self {
        Self {
            cancels_on_or_before: Some(date),
            ..Self::default()
        }
    }

    /// Returns true if `invoice` satisfies this filter
    pub fn matches(&self, invoice: &Invoice) -> bool {
        if invoice.deleted && !self.include_deleted {
            return false;
        }
        if let Some(cutoff) = self.billed_on_or_before {
            if invoice.bill_date > cutoff {
                return false;
            }
        }
        if let Some(cutoff) = self.due_on_or_before {
            if invoice.due_date > cutoff {
                return false;
            }
        }
        if let Some(cutoff) = self.cancels_on_or_before {
            if invoice.cancel_date > cutoff {
                return false;
            }
        }
        true
    }
}

/// Port to the record store holding policy, contact, invoice, and
/// payment records
pub trait RecordStore: Send + Sync {
    /// Looks up a policy by id
    fn policy(&self, id: PolicyId) -> Result<Policy, StoreError>;

    /// Inserts a new policy
    fn insert_policy(&self, policy: Policy) -> Result<(), StoreError>;

    /// Replaces an existing policy record
    fn update_policy(&self, policy: &Policy) -> Result<(), StoreError>;

    /// Looks up a contact by id
    fn contact(&self, id: ContactId) -> Result<Contact, StoreError>;

    /// Inserts a new contact
    fn insert_contact(&self, contact: Contact) -> Result<(), StoreError>;

    /// Returns a policy's invoices matching `query`, ordered by bill
    /// date ascending
    fn invoices(&self, policy_id: PolicyId, query: &InvoiceQuery) -> Result<Vec<Invoice>, StoreError>;

    /// Inserts a new invoice
    fn insert_invoice(&self, invoice: Invoice) -> Result<(), StoreError>;

    /// Soft-deletes an invoice
    fn mark_invoice_deleted(&self, id: InvoiceId) -> Result<(), StoreError>;

    /// Returns a policy's payments, optionally only those with a
    /// transaction date on or before `on_or_before` (inclusive)
    fn payments(
        &self,
        policy_id: PolicyId,
        on_or_before: Option<NaiveDate>,
    ) -> Result<Vec<Payment>, StoreError>;

    /// Appends a payment record
    fn insert_payment(&self, payment: Payment) -> Result<(), StoreError>;

    /// Returns a policy's cancellation record, if one was executed
    fn cancellation(&self, policy_id: PolicyId) -> Result<Option<PolicyCancellation>, StoreError>;

    /// Records an executed cancellation
    fn insert_cancellation(&self, cancellation: PolicyCancellation) -> Result<(), StoreError>;
}
