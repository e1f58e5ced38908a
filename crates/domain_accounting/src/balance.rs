//! Account balance calculation
//!
//! Balances are always re-derived from the invoice and payment records
//! at a cutoff date; nothing is cached.

use chrono::NaiveDate;

use core_kernel::PolicyId;

use crate::error::AccountingError;
use crate::store::{InvoiceQuery, RecordStore};

/// Computes policy balances as of a cutoff date
pub struct BalanceCalculator<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> BalanceCalculator<'a> {
    /// Creates a calculator over the given store
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Outstanding balance as of `as_of`: the sum of `amount_due` over
    /// non-deleted invoices billed on or before `as_of`, minus the sum
    /// of payments made on or before `as_of`. Both cutoffs are
    /// inclusive. A negative result is a credit (overpayment).
    pub fn balance(&self, policy_id: PolicyId, as_of: NaiveDate) -> Result<i64, AccountingError> {
        let invoices = self
            .store
            .invoices(policy_id, &InvoiceQuery::billed_through(as_of))?;
        let billed: i64 = invoices.iter().map(|invoice| invoice.amount_due).sum();

        Ok(billed - self.paid_through(policy_id, as_of)?)
    }

    /// Portion of the balance that has actually come due by `as_of`:
    /// invoices are counted by due date instead of bill date. This is
    /// the figure the pending-cancellation check evaluates, so that an
    /// installment billed but not yet due does not flag a policy whose
    /// due installments are fully paid.
    pub fn past_due_balance(
        &self,
        policy_id: PolicyId,
        as_of: NaiveDate,
    ) -> Result<i64, AccountingError> {
        let invoices = self
            .store
            .invoices(policy_id, &InvoiceQuery::due_through(as_of))?;
        let due: i64 = invoices.iter().map(|invoice| invoice.amount_due).sum();

        Ok(due - self.paid_through(policy_id, as_of)?)
    }

    fn paid_through(&self, policy_id: PolicyId, as_of: NaiveDate) -> Result<i64, AccountingError> {
        let payments = self.store.payments(policy_id, Some(as_of))?;
        Ok(payments.iter().map(|payment| payment.amount_paid).sum())
    }
}
