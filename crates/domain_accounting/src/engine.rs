//! Policy accounting engine
//!
//! The façade composing invoice generation, balance calculation,
//! payment recording, and cancellation evaluation against a single
//! policy. Each policy gets its own engine instance for the duration
//! of one logical operation.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use core_kernel::{temporal, ContactId, PolicyId};

use crate::balance::BalanceCalculator;
use crate::cancellation::CancellationEvaluator;
use crate::error::AccountingError;
use crate::generator::InvoiceGenerator;
use crate::invoice::Invoice;
use crate::payment::Payment;
use crate::policy::{CancellationReason, Policy, PolicyCancellation, PolicyStatus};
use crate::recorder::PaymentRecorder;
use crate::store::{InvoiceQuery, RecordStore};

/// Accounting operations for one policy
pub struct PolicyAccounting {
    store: Arc<dyn RecordStore>,
    policy: Policy,
}

impl PolicyAccounting {
    /// Opens the accounting engine for `policy_id`.
    ///
    /// Loads the policy and, when it has no active invoices yet,
    /// generates the full set for its billing schedule. Construction
    /// therefore has an observable side effect: invoice records may be
    /// created.
    ///
    /// # Errors
    ///
    /// Surfaces `NotFound` when the policy id does not resolve, and
    /// any generation failure (for example an unsupported billing
    /// schedule).
    pub fn open(store: Arc<dyn RecordStore>, policy_id: PolicyId) -> Result<Self, AccountingError> {
        let policy = store.policy(policy_id)?;
        let engine = Self { store, policy };

        if engine
            .store
            .invoices(policy_id, &InvoiceQuery::active())?
            .is_empty()
        {
            InvoiceGenerator::new(engine.store.as_ref()).generate(&engine.policy)?;
        }

        Ok(engine)
    }

    /// The policy this engine operates on
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Outstanding balance as of `as_of` (today when unset); negative
    /// means a credit
    pub fn balance(&self, as_of: Option<NaiveDate>) -> Result<i64, AccountingError> {
        let as_of = as_of.unwrap_or_else(temporal::today);
        BalanceCalculator::new(self.store.as_ref()).balance(self.policy.id, as_of)
    }

    /// Records a payment; the payer defaults to the named insured and
    /// the date to today
    pub fn record_payment(
        &self,
        contact_id: Option<ContactId>,
        as_of: Option<NaiveDate>,
        amount: i64,
    ) -> Result<Payment, AccountingError> {
        PaymentRecorder::new(self.store.as_ref()).record(&self.policy, contact_id, as_of, amount)
    }

    /// Whether an invoice is past due and unpaid without having
    /// reached its cancel date
    pub fn is_pending_cancellation_for_nonpay(
        &self,
        as_of: Option<NaiveDate>,
    ) -> Result<bool, AccountingError> {
        let as_of = as_of.unwrap_or_else(temporal::today);
        CancellationEvaluator::new(self.store.as_ref())
            .is_pending_cancellation_for_nonpay(self.policy.id, as_of)
    }

    /// Whether the policy should be cancelled for nonpayment
    pub fn should_cancel(&self, as_of: Option<NaiveDate>) -> Result<bool, AccountingError> {
        let as_of = as_of.unwrap_or_else(temporal::today);
        CancellationEvaluator::new(self.store.as_ref()).should_cancel(self.policy.id, as_of)
    }

    /// Regenerates the policy's invoices from scratch, retiring the
    /// current set
    pub fn regenerate_invoices(&self) -> Result<Vec<Invoice>, AccountingError> {
        InvoiceGenerator::new(self.store.as_ref()).generate(&self.policy)
    }

    /// Executes a cancellation: writes the cancellation record and
    /// flips the policy status to `Canceled`.
    ///
    /// This is the apply step kept deliberately separate from
    /// [`PolicyAccounting::should_cancel`]; nothing cancels a policy
    /// implicitly.
    pub fn cancel(
        &mut self,
        reason: CancellationReason,
        as_of: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<PolicyCancellation, AccountingError> {
        if self.store.cancellation(self.policy.id)?.is_some() {
            return Err(AccountingError::AlreadyCancelled {
                policy_id: self.policy.id,
            });
        }

        let date = as_of.unwrap_or_else(temporal::today);
        let mut cancellation = PolicyCancellation::new(self.policy.id, reason, date);
        if let Some(notes) = notes {
            cancellation = cancellation.with_notes(notes);
        }

        // The status flips before the record is written. A failure
        // between the two writes leaves a cancelled policy awaiting its
        // record, which a retried cancel completes; never a
        // cancellation record on a still-active policy.
        let mut updated = self.policy.clone();
        updated.status = PolicyStatus::Canceled;
        self.store.update_policy(&updated)?;
        self.store.insert_cancellation(cancellation.clone())?;
        self.policy = updated;

        info!(
            policy_id = %self.policy.id,
            reason = ?reason,
            %date,
            "policy cancelled"
        );

        Ok(cancellation)
    }

    /// Cancels the policy for nonpayment if [`should_cancel`] says so;
    /// returns `None` when the decision is negative.
    ///
    /// [`should_cancel`]: PolicyAccounting::should_cancel
    pub fn cancel_for_nonpay(
        &mut self,
        as_of: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<Option<PolicyCancellation>, AccountingError> {
        if !self.should_cancel(as_of)? {
            return Ok(None);
        }
        self.cancel(CancellationReason::Nonpayment, as_of, notes)
            .map(Some)
    }
}
