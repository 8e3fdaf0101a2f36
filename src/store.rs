//! src/store.rs

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    ContactSubmission, NewContactSubmission, NewNewsletterSubscription, NewsletterSubscription,
};

/// Error of the in-memory submission store
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Email already subscribed")]
    DuplicateSubscription,
    #[error("The {0} collection is unavailable after a panic while it was locked")]
    StorageFault(&'static str),
}

/// Records of one submission kind, kept in insertion order.
struct Collection<T> {
    name: &'static str,
    records: Mutex<Vec<T>>,
}

impl<T> Collection<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<T>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::StorageFault(self.name))
    }
}

/// Trait to give `Collection` access to the creation timestamp of a record
trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Timestamped for ContactSubmission {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for NewsletterSubscription {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// current time, but never earlier than the newest record
fn next_timestamp<T: Timestamped>(records: &[T]) -> DateTime<Utc> {
    let now = Utc::now();
    match records.last() {
        Some(last) if last.created_at() > now => last.created_at(),
        _ => now,
    }
}

impl<T: Timestamped + Clone> Collection<T> {
    /// Snapshot of all records, newest first.
    ///
    /// Sorting happens on every read. Records sharing a timestamp are listed
    /// latest insert first.
    fn newest_first(&self) -> Result<Vec<T>, StoreError> {
        let records = self.lock()?;
        let mut snapshot: Vec<T> = records.iter().rev().cloned().collect();
        // stable sort keeps the reversed insertion order for equal timestamps
        snapshot.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(snapshot)
    }
}

/// In-memory store owning every submission for the lifetime of the process.
///
/// Construct one per application (or per test) and share it,
/// e.g. via `web::Data`.
pub struct SubmissionStore {
    contact_submissions: Collection<ContactSubmission>,
    newsletter_subscriptions: Collection<NewsletterSubscription>,
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self {
            contact_submissions: Collection::new("contact submissions"),
            newsletter_subscriptions: Collection::new("newsletter subscriptions"),
        }
    }

    #[tracing::instrument(
        name = "Storing a new contact submission.",
        skip(self, submission),
        fields(submission_id = tracing::field::Empty)
    )]
    pub fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        let mut records = self.contact_submissions.lock()?;
        let created_at = next_timestamp(records.as_slice());
        let stored = ContactSubmission::new(submission, Uuid::new_v4(), created_at);
        tracing::Span::current().record("submission_id", tracing::field::display(&stored.id));
        records.push(stored.clone());
        Ok(stored)
    }

    #[tracing::instrument(name = "Listing contact submissions.", skip(self))]
    pub fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        self.contact_submissions.newest_first()
    }

    pub fn contact_submission(&self, id: Uuid) -> Result<Option<ContactSubmission>, StoreError> {
        let records = self.contact_submissions.lock()?;
        Ok(records.iter().find(|s| s.id == id).cloned())
    }

    /// Fails with `StoreError::DuplicateSubscription` if the exact email is
    /// already subscribed. Check and insert happen under one lock.
    #[tracing::instrument(
        name = "Storing a new newsletter subscription.",
        skip(self, subscription),
        fields(
            subscriber_email = %subscription.email,
            subscription_id = tracing::field::Empty
        )
    )]
    pub fn create_newsletter_subscription(
        &self,
        subscription: NewNewsletterSubscription,
    ) -> Result<NewsletterSubscription, StoreError> {
        let mut records = self.newsletter_subscriptions.lock()?;
        if records
            .iter()
            .any(|s| s.email.as_ref() == subscription.email.as_ref())
        {
            return Err(StoreError::DuplicateSubscription);
        }
        let created_at = next_timestamp(records.as_slice());
        let stored = NewsletterSubscription::new(subscription, Uuid::new_v4(), created_at);
        tracing::Span::current().record("subscription_id", tracing::field::display(&stored.id));
        records.push(stored.clone());
        Ok(stored)
    }

    #[tracing::instrument(name = "Listing newsletter subscriptions.", skip(self))]
    pub fn list_newsletter_subscriptions(
        &self,
    ) -> Result<Vec<NewsletterSubscription>, StoreError> {
        self.newsletter_subscriptions.newest_first()
    }

    pub fn newsletter_subscription(
        &self,
        id: Uuid,
    ) -> Result<Option<NewsletterSubscription>, StoreError> {
        let records = self.newsletter_subscriptions.lock()?;
        Ok(records.iter().find(|s| s.id == id).cloned())
    }
}
