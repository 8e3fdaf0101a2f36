//! src/domain/newsletter_subscription.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{FormFields, SubmitterEmail, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNewsletterSubscription {
    pub email: SubmitterEmail,
}

impl TryFrom<FormFields> for NewNewsletterSubscription {
    type Error = ValidationError;

    fn try_from(mut fields: FormFields) -> Result<Self, Self::Error> {
        let email = fields.required_string("email").and_then(SubmitterEmail::parse)?;
        Ok(Self { email })
    }
}

/// A stored newsletter subscription. The email is unique among all of them.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: SubmitterEmail,
    pub created_at: DateTime<Utc>,
}

impl NewsletterSubscription {
    pub fn new(subscription: NewNewsletterSubscription, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: subscription.email,
            created_at,
        }
    }
}
