//! Contact records
//!
//! Contacts are immutable after creation in this crate's scope.

use serde::{Deserialize, Serialize};

use core_kernel::ContactId;

/// Role a contact plays on a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactRole {
    /// The insured party, and the default payer on a policy
    #[serde(rename = "Named Insured")]
    NamedInsured,
    /// The servicing agent
    Agent,
    /// A client contact
    Client,
}

/// A person or organization referenced by policies and payments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Role
    pub role: ContactRole,
}

impl Contact {
    /// Creates a new contact
    pub fn new(name: impl Into<String>, role: ContactRole) -> Self {
        Self {
            id: ContactId::new_v7(),
            name: name.into(),
            role,
        }
    }
}
