//! Core Kernel - foundational types for the policy billing system
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure crates:
//! - Strongly-typed identifiers for policies, contacts, invoices, and payments
//! - Calendar-date arithmetic for billing schedules

pub mod identifiers;
pub mod temporal;

pub use identifiers::{ContactId, InvoiceId, PaymentId, PolicyId};
pub use temporal::TemporalError;
