//! Policy records and billing schedules
//!
//! The policy is the aggregate root for its invoices, payments, and
//! cancellation record, all referenced by id rather than embedded.
//! The accounting engine operates on one policy's closure of records
//! at a time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{ContactId, PolicyId};

/// Policy lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyStatus {
    /// Policy is in force
    Active,
    /// Policy was cancelled before its natural end
    Canceled,
    /// Policy ran to its natural end
    Expired,
}

/// How a policy's annual premium is partitioned into invoices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingSchedule {
    /// One invoice for the full annual premium
    Annual,
    /// Two installments, six months apart
    #[serde(rename = "Two-Pay")]
    TwoPay,
    /// Reserved; see [`BillingSchedule::installment_count`]
    #[serde(rename = "Semi-Annual")]
    SemiAnnual,
    /// Four installments, three months apart
    Quarterly,
    /// Twelve installments, one month apart
    Monthly,
}

impl BillingSchedule {
    /// Number of invoices the annual premium is split into, or `None`
    /// for a schedule invoicing cannot support.
    ///
    /// Semi-annual is carried in the legacy schedule table with a
    /// period count of 3, which does not divide the 12-month policy
    /// year evenly. Until the period count is settled it is rejected
    /// at invoice-generation time rather than guessed at.
    pub fn installment_count(&self) -> Option<u32> {
        match self {
            BillingSchedule::Annual => Some(1),
            BillingSchedule::TwoPay => Some(2),
            BillingSchedule::SemiAnnual => None,
            BillingSchedule::Quarterly => Some(4),
            BillingSchedule::Monthly => Some(12),
        }
    }

    /// Months between consecutive bill dates for a supported schedule
    pub fn months_between_installments(&self) -> Option<u32> {
        self.installment_count().map(|count| 12 / count)
    }
}

/// An insurance policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Policy number (human-readable)
    pub policy_number: String,
    /// Date the policy takes effect; also the first bill date
    pub effective_date: NaiveDate,
    /// Lifecycle status
    pub status: PolicyStatus,
    /// Billing schedule
    pub billing_schedule: BillingSchedule,
    /// Annual premium in whole currency units
    pub annual_premium: i64,
    /// Named insured contact, the default payer
    pub named_insured: Option<ContactId>,
    /// Servicing agent contact
    pub agent: Option<ContactId>,
}

impl Policy {
    /// Creates an active annual-schedule policy
    pub fn new(
        policy_number: impl Into<String>,
        effective_date: NaiveDate,
        annual_premium: i64,
    ) -> Self {
        Self {
            id: PolicyId::new_v7(),
            policy_number: policy_number.into(),
            effective_date,
            status: PolicyStatus::Active,
            billing_schedule: BillingSchedule::Annual,
            annual_premium,
            named_insured: None,
            agent: None,
        }
    }

    /// Sets the billing schedule
    pub fn with_billing_schedule(mut self, schedule: BillingSchedule) -> Self {
        self.billing_schedule = schedule;
        self
    }

    /// Sets the named insured
    pub fn with_named_insured(mut self, contact_id: ContactId) -> Self {
        self.named_insured = Some(contact_id);
        self
    }

    /// Sets the servicing agent
    pub fn with_agent(mut self, contact_id: ContactId) -> Self {
        self.agent = Some(contact_id);
        self
    }
}

/// Why a policy was cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancellationReason {
    /// Premium went unpaid past an invoice's cancel date
    Nonpayment,
    /// Underwriting decision
    Underwriting,
    /// Cancelled at the client's request
    Client,
}

/// Record of an executed cancellation
///
/// At most one exists per policy; its absence means the policy is not
/// cancelled. Writing this record is a distinct step from the
/// should-cancel decision itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyCancellation {
    /// Policy this cancellation applies to (1:1)
    pub policy_id: PolicyId,
    /// Reason for the cancellation
    pub reason: CancellationReason,
    /// Date the cancellation took effect
    pub date: NaiveDate,
    /// Free-form notes
    pub notes: String,
}

impl PolicyCancellation {
    /// Creates a cancellation record with empty notes
    pub fn new(policy_id: PolicyId, reason: CancellationReason, date: NaiveDate) -> Self {
        Self {
            policy_id,
            reason,
            date,
            notes: String::new(),
        }
    }

    /// Attaches notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
