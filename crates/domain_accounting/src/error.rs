//! Accounting domain errors

use thiserror::Error;

use core_kernel::{PolicyId, TemporalError};

use crate::policy::BillingSchedule;
use crate::store::StoreError;

/// Errors that can occur in the accounting domain
///
/// Store and temporal errors pass through unchanged; the engine never
/// swallows or degrades them into default computations.
#[derive(Debug, Error)]
pub enum AccountingError {
    /// A store operation failed (including policy-not-found)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A date failed to parse or a calendar offset overflowed
    #[error(transparent)]
    Temporal(#[from] TemporalError),

    /// The policy's billing schedule cannot be invoiced
    #[error("invalid billing schedule {schedule:?} on policy {policy_id}")]
    InvalidBillingSchedule {
        policy_id: PolicyId,
        schedule: BillingSchedule,
    },

    /// A payment was recorded with no payer and no named insured to
    /// fall back to
    #[error("policy {policy_id} has no named insured to record the payment against")]
    NoPayerOnRecord { policy_id: PolicyId },

    /// A record failed domain validation
    #[error("validation error: {0}")]
    Validation(String),

    /// A cancellation was executed against an already-cancelled policy
    #[error("policy {policy_id} is already cancelled")]
    AlreadyCancelled { policy_id: PolicyId },
}

impl AccountingError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        AccountingError::Validation(message.into())
    }

    /// Returns true if this error indicates a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccountingError::Store(e) if e.is_not_found())
    }
}
