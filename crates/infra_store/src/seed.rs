//! Demo dataset
//!
//! A small book of business covering every supported billing
//! schedule, used by demos and integration tests.

use chrono::NaiveDate;

use core_kernel::{ContactId, PolicyId};
use domain_accounting::{
    BillingSchedule, Contact, ContactRole, Payment, Policy, RecordStore, StoreError,
};

use crate::memory::InMemoryStore;

/// Identifiers of the seeded records
pub struct SeedData {
    pub policy_one: PolicyId,
    pub policy_two: PolicyId,
    pub policy_three: PolicyId,
    pub policy_four: PolicyId,
    pub mary_sue: ContactId,
    pub john_doe_agent: ContactId,
    pub john_doe_insured: ContactId,
    pub bob_smith: ContactId,
    pub anna_white: ContactId,
    pub joe_lee: ContactId,
    pub ryan_bucket: ContactId,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Seeds `store` with the demo contacts, policies, and one payment.
///
/// Invoices are not generated here; opening a policy through the
/// accounting engine generates them on first use.
pub fn seed_demo_data(store: &InMemoryStore) -> Result<SeedData, StoreError> {
    let mary_sue = Contact::new("Mary Sue", ContactRole::Client);
    let john_doe_agent = Contact::new("John Doe", ContactRole::Agent);
    let john_doe_insured = Contact::new("John Doe", ContactRole::NamedInsured);
    let bob_smith = Contact::new("Bob Smith", ContactRole::Agent);
    let anna_white = Contact::new("Anna White", ContactRole::NamedInsured);
    let joe_lee = Contact::new("Joe Lee", ContactRole::Agent);
    let ryan_bucket = Contact::new("Ryan Bucket", ContactRole::NamedInsured);

    let policy_one = Policy::new("Policy One", date(2015, 1, 1), 365)
        .with_billing_schedule(BillingSchedule::Annual)
        .with_agent(bob_smith.id);
    let policy_two = Policy::new("Policy Two", date(2015, 2, 1), 1600)
        .with_billing_schedule(BillingSchedule::Quarterly)
        .with_named_insured(anna_white.id)
        .with_agent(joe_lee.id);
    let policy_three = Policy::new("Policy Three", date(2015, 1, 1), 1200)
        .with_billing_schedule(BillingSchedule::Monthly)
        .with_named_insured(ryan_bucket.id)
        .with_agent(john_doe_agent.id);
    let policy_four = Policy::new("Policy Four", date(2015, 2, 1), 500)
        .with_billing_schedule(BillingSchedule::TwoPay)
        .with_named_insured(ryan_bucket.id)
        .with_agent(john_doe_agent.id);

    let seed = SeedData {
        policy_one: policy_one.id,
        policy_two: policy_two.id,
        policy_three: policy_three.id,
        policy_four: policy_four.id,
        mary_sue: mary_sue.id,
        john_doe_agent: john_doe_agent.id,
        john_doe_insured: john_doe_insured.id,
        bob_smith: bob_smith.id,
        anna_white: anna_white.id,
        joe_lee: joe_lee.id,
        ryan_bucket: ryan_bucket.id,
    };

    for contact in [
        mary_sue,
        john_doe_agent,
        john_doe_insured,
        bob_smith,
        anna_white,
        joe_lee,
        ryan_bucket,
    ] {
        store.insert_contact(contact)?;
    }

    for policy in [policy_one, policy_two, policy_three, policy_four] {
        store.insert_policy(policy)?;
    }

    store.insert_payment(Payment::new(
        seed.policy_two,
        seed.anna_white,
        400,
        date(2015, 2, 1),
    ))?;

    Ok(seed)
}
