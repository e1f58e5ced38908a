//! Test Utilities Crate
//!
//! Shared test infrastructure for the policy billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: calendar anchors and premium constants
//! - `builders`: builder patterns for test data construction
//! - `generators`: property-based test data generators

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::*;
pub use fixtures::*;
pub use generators::*;
