//! Payment records
//!
//! Payments are append-only: once recorded they are never updated or
//! removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{ContactId, PaymentId, PolicyId};

/// A payment made against a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Policy the payment applies to
    pub policy_id: PolicyId,
    /// Payer
    pub contact_id: ContactId,
    /// Amount paid in whole currency units
    pub amount_paid: i64,
    /// Date the payment was made
    pub transaction_date: NaiveDate,
}

impl Payment {
    /// Creates a new payment record
    pub fn new(
        policy_id: PolicyId,
        contact_id: ContactId,
        amount_paid: i64,
        transaction_date: NaiveDate,
    ) -> Self {
        Self {
            id: PaymentId::new_v7(),
            policy_id,
            contact_id,
            amount_paid,
            transaction_date,
        }
    }
}
