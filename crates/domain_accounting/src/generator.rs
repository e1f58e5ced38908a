//! Invoice generation
//!
//! The generator produces the full invoice set for a policy's billing
//! schedule in one pass, rather than period by period. Generation is
//! a full regeneration: any invoices already on the policy are
//! soft-deleted first, so running it twice never doubles the active
//! invoice count.

use tracing::info;

use core_kernel::temporal;

use crate::error::AccountingError;
use crate::invoice::Invoice;
use crate::policy::Policy;
use crate::store::{InvoiceQuery, RecordStore};

/// Generates the invoices for a policy's billing schedule
pub struct InvoiceGenerator<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> InvoiceGenerator<'a> {
    /// Creates a generator over the given store
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Generates and persists the full invoice set for `policy`.
    ///
    /// The first invoice is always billed on the effective date. For a
    /// schedule with n installments, every invoice is for
    /// `annual_premium / n` (truncating integer division; the
    /// remainder is dropped, not redistributed) and installment i
    /// bills `i * (12 / n)` months after the effective date. Each
    /// invoice's due and cancel dates derive from its own bill date.
    ///
    /// # Errors
    ///
    /// Returns [`AccountingError::InvalidBillingSchedule`] when the
    /// schedule has no usable installment count; generating zero
    /// invoices silently is not an option.
    pub fn generate(&self, policy: &Policy) -> Result<Vec<Invoice>, AccountingError> {
        if policy.annual_premium < 0 {
            return Err(AccountingError::validation(format!(
                "policy {} has a negative annual premium",
                policy.id
            )));
        }

        let count = policy.billing_schedule.installment_count().ok_or(
            AccountingError::InvalidBillingSchedule {
                policy_id: policy.id,
                schedule: policy.billing_schedule,
            },
        )?;

        // Full regeneration: retire whatever is already on the policy.
        let existing = self.store.invoices(policy.id, &InvoiceQuery::active())?;
        for invoice in &existing {
            self.store.mark_invoice_deleted(invoice.id)?;
        }

        // There is always a first invoice on the effective date. It
        // starts out carrying the full annual premium and is adjusted
        // below when the schedule splits the year.
        let mut invoices = vec![Invoice::new(
            policy.id,
            policy.effective_date,
            policy.annual_premium,
        )?];

        if count > 1 {
            let amount = policy.annual_premium / i64::from(count);
            let spacing = 12 / count;

            invoices[0].amount_due = amount;
            for i in 1..count {
                let bill_date = temporal::months_after(policy.effective_date, i * spacing)?;
                invoices.push(Invoice::new(policy.id, bill_date, amount)?);
            }
        }

        for invoice in &invoices {
            self.store.insert_invoice(invoice.clone())?;
        }

        info!(
            policy_id = %policy.id,
            schedule = ?policy.billing_schedule,
            count = invoices.len(),
            retired = existing.len(),
            "generated invoices"
        );

        Ok(invoices)
    }
}
