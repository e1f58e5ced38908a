//! Payment recording

use chrono::NaiveDate;
use tracing::info;

use core_kernel::{temporal, ContactId};

use crate::error::AccountingError;
use crate::payment::Payment;
use crate::policy::Policy;
use crate::store::RecordStore;

/// Appends payment records for a policy
pub struct PaymentRecorder<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> PaymentRecorder<'a> {
    /// Creates a recorder over the given store
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Records a payment of `amount` against `policy`.
    ///
    /// The payer defaults to the policy's named insured when not
    /// supplied, and the transaction date defaults to today. Amount
    /// sign and magnitude are not validated, and the payer contact is
    /// not checked for existence. Invoices are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`AccountingError::NoPayerOnRecord`] when no contact is
    /// supplied and the policy has no named insured.
    pub fn record(
        &self,
        policy: &Policy,
        contact_id: Option<ContactId>,
        as_of: Option<NaiveDate>,
        amount: i64,
    ) -> Result<Payment, AccountingError> {
        let payer = contact_id
            .or(policy.named_insured)
            .ok_or(AccountingError::NoPayerOnRecord {
                policy_id: policy.id,
            })?;
        let transaction_date = as_of.unwrap_or_else(temporal::today);

        let payment = Payment::new(policy.id, payer, amount, transaction_date);
        self.store.insert_payment(payment.clone())?;

        info!(
            policy_id = %policy.id,
            payment_id = %payment.id,
            payer = %payer,
            amount,
            date = %transaction_date,
            "recorded payment"
        );

        Ok(payment)
    }
}
