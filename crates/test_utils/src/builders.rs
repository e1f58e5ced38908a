//! Test data builders
//!
//! Builder patterns for constructing test data with sensible
//! defaults, so tests only specify the fields they care about.

use std::sync::Arc;

use chrono::NaiveDate;

use core_kernel::{ContactId, PolicyId};
use domain_accounting::{
    BillingSchedule, Contact, ContactRole, Policy, RecordStore,
};
use infra_store::InMemoryStore;

use crate::fixtures::TemporalFixtures;

/// Builder for test policies
pub struct PolicyBuilder {
    policy_number: String,
    effective_date: NaiveDate,
    annual_premium: i64,
    billing_schedule: BillingSchedule,
    named_insured: Option<ContactId>,
    agent: Option<ContactId>,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    /// Creates a builder with default values: an annual policy for
    /// 1200 effective Jan 1, 2015
    pub fn new() -> Self {
        Self {
            policy_number: "Test Policy".to_string(),
            effective_date: TemporalFixtures::effective_date(),
            annual_premium: 1200,
            billing_schedule: BillingSchedule::Annual,
            named_insured: None,
            agent: None,
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    /// Sets the effective date
    pub fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = date;
        self
    }

    /// Sets the annual premium
    pub fn with_annual_premium(mut self, premium: i64) -> Self {
        self.annual_premium = premium;
        self
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

    /// Sets the agent
    pub fn with_agent(mut self, contact_id: ContactId) -> Self {
        self.agent = Some(contact_id);
        self
    }

    /// Builds the policy
    pub fn build(self) -> Policy {
        let mut policy = Policy::new(
            self.policy_number,
            self.effective_date,
            self.annual_premium,
        )
        .with_billing_schedule(self.billing_schedule);
        policy.named_insured = self.named_insured;
        policy.agent = self.agent;
        policy
    }
}

/// A freshly seeded store holding one policy and its contacts
pub struct PolicyHarness {
    pub store: Arc<InMemoryStore>,
    pub policy_id: PolicyId,
    pub insured_id: ContactId,
    pub agent_id: ContactId,
}

/// Inserts a named insured, an agent, and the builder's policy wired
/// to both into a fresh in-memory store.
pub fn store_with_policy(builder: PolicyBuilder) -> PolicyHarness {
    let store = Arc::new(InMemoryStore::new());

    let insured = Contact::new("Test Insured", ContactRole::NamedInsured);
    let agent = Contact::new("Test Agent", ContactRole::Agent);
    let insured_id = insured.id;
    let agent_id = agent.id;
    store.insert_contact(insured).expect("insert insured");
    store.insert_contact(agent).expect("insert agent");

    let policy = builder
        .with_named_insured(insured_id)
        .with_agent(agent_id)
        .build();
    let policy_id = policy.id;
    store.insert_policy(policy).expect("insert policy");

    PolicyHarness {
        store,
        policy_id,
        insured_id,
        agent_id,
    }
}
