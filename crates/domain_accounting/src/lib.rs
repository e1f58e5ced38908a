//! Policy Accounting Domain
//!
//! This crate tracks the billing lifecycle of an insurance policy:
//! generating invoices across a billing schedule, recording payments,
//! computing the outstanding balance as of an arbitrary date, and
//! evaluating whether a policy should be flagged for (or executed
//! into) cancellation due to non-payment.
//!
//! # Components
//!
//! - [`InvoiceGenerator`]: produces the full invoice set for a
//!   policy's billing schedule in one pass
//! - [`BalanceCalculator`]: invoiced amounts minus payments up to a
//!   cutoff date
//! - [`CancellationEvaluator`]: pending-cancellation and
//!   should-cancel decisions from invoice due/cancel dates
//! - [`PaymentRecorder`]: appends payment records
//! - [`PolicyAccounting`]: the façade composing the above against one
//!   policy
//!
//! All components read and write through the [`RecordStore`] port; the
//! store capability is passed explicitly so tests can substitute an
//! in-memory implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_accounting::PolicyAccounting;
//!
//! let engine = PolicyAccounting::open(store, policy_id)?;
//! let balance = engine.balance(None)?;
//! if engine.should_cancel(None)? {
//!     engine.cancel_for_nonpay(None, Some("lapsed after final notice"))?;
//! }
//! ```

pub mod balance;
pub mod cancellation;
pub mod contact;
pub mod engine;
pub mod error;
pub mod generator;
pub mod invoice;
pub mod payment;
pub mod policy;
pub mod recorder;
pub mod store;

pub use balance::BalanceCalculator;
pub use cancellation::CancellationEvaluator;
pub use contact::{Contact, ContactRole};
pub use engine::PolicyAccounting;
pub use error::AccountingError;
pub use generator::InvoiceGenerator;
pub use invoice::Invoice;
pub use payment::Payment;
pub use policy::{BillingSchedule, CancellationReason, Policy, PolicyCancellation, PolicyStatus};
pub use recorder::PaymentRecorder;
pub use store::{InvoiceQuery, RecordStore, StoreError};
