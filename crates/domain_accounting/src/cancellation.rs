//! Nonpayment cancellation evaluation
//!
//! Two decisions over the same policy, both re-derived from current
//! records on every call:
//!
//! - *pending*: an invoice has gone past its due date unpaid but has
//!   not yet reached its cancel date
//! - *should cancel*: an invoice's cancel date has passed with the
//!   account balance still positive
//!
//! Deciding is distinct from applying: neither operation writes a
//! cancellation record or touches policy status. That transition is
//! [`crate::engine::PolicyAccounting::cancel`].

use chrono::NaiveDate;
use tracing::{debug, warn};

use core_kernel::PolicyId;

use crate::balance::BalanceCalculator;
use crate::error::AccountingError;
use crate::store::{InvoiceQuery, RecordStore};

/// Evaluates a policy's nonpayment cancellation status
pub struct CancellationEvaluator<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> CancellationEvaluator<'a> {
    /// Creates an evaluator over the given store
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Returns true if an invoice has passed its due date without its
    /// due amount being covered, while the policy has not yet reached
    /// that invoice's cancel date.
    ///
    /// `due_date == as_of` counts as past due; `cancel_date == as_of`
    /// no longer counts as pending (that is should-cancel territory).
    pub fn is_pending_cancellation_for_nonpay(
        &self,
        policy_id: PolicyId,
        as_of: NaiveDate,
    ) -> Result<bool, AccountingError> {
        let balances = BalanceCalculator::new(self.store);
        let past_due = self
            .store
            .invoices(policy_id, &InvoiceQuery::due_through(as_of))?;

        for invoice in past_due {
            if invoice.cancel_date <= as_of {
                continue;
            }
            if balances.past_due_balance(policy_id, invoice.due_date)? > 0 {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Returns true if the policy should be cancelled for nonpayment:
    /// some invoice's cancel date has passed (inclusive of `as_of`)
    /// with the account balance at that cancel date still positive.
    ///
    /// This only surfaces the decision; executing the cancellation is
    /// a separate step.
    pub fn should_cancel(
        &self,
        policy_id: PolicyId,
        as_of: NaiveDate,
    ) -> Result<bool, AccountingError> {
        let balances = BalanceCalculator::new(self.store);
        let cancellable = self
            .store
            .invoices(policy_id, &InvoiceQuery::cancellable_through(as_of))?;

        for invoice in cancellable {
            if balances.balance(policy_id, invoice.cancel_date)? > 0 {
                warn!(
                    policy_id = %policy_id,
                    invoice_id = %invoice.id,
                    cancel_date = %invoice.cancel_date,
                    "policy should cancel for nonpayment"
                );
                return Ok(true);
            }
        }

        debug!(policy_id = %policy_id, %as_of, "policy should not cancel");
        Ok(false)
    }
}
