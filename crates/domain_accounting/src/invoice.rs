//! Invoice records
//!
//! Invoices are created in batch by the generator and never mutated
//! afterwards, except to be marked deleted when a policy's schedule is
//! regenerated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::temporal::{self, TemporalError};
use core_kernel::{InvoiceId, PolicyId};

/// A single premium installment billed to a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Policy this invoice bills
    pub policy_id: PolicyId,
    /// Date the installment is billed
    pub bill_date: NaiveDate,
    /// Date payment is due: bill date + 1 month
    pub due_date: NaiveDate,
    /// Date the policy becomes cancellable: due date + 14 days
    pub cancel_date: NaiveDate,
    /// Installment amount in whole currency units
    pub amount_due: i64,
    /// Soft-delete flag, set when invoices are regenerated
    pub deleted: bool,
}

impl Invoice {
    /// Creates an invoice billed on `bill_date`.
    ///
    /// The due date falls one calendar month after the bill date and
    /// the cancel date 14 days after that, so
    /// `bill_date < due_date < cancel_date` holds by construction.
    pub fn new(
        policy_id: PolicyId,
        bill_date: NaiveDate,
        amount_due: i64,
    ) -> Result<Self, TemporalError> {
        let due_date = temporal::months_after(bill_date, 1)?;
        let cancel_date = temporal::days_after(due_date, 14)?;

        Ok(Self {
            id: InvoiceId::new_v7(),
            policy_id,
            bill_date,
            due_date,
            cancel_date,
            amount_due,
            deleted: false,
        })
    }
}
