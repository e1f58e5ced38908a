//! Record store adapters
//!
//! This crate provides the in-memory [`RecordStore`] adapter used by
//! tests, demos, and any caller that serializes access to one
//! policy's records itself. A fuller deployment would add a database
//! adapter behind the same port.
//!
//! [`RecordStore`]: domain_accounting::RecordStore

pub mod memory;
pub mod seed;

pub use memory::InMemoryStore;
pub use seed::{seed_demo_data, SeedData};
