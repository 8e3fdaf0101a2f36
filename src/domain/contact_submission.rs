//! src/domain/contact_submission.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    ContactMessage, FieldViolation, FormFields, SubmitterEmail, SubmitterName, ValidationError,
    ViolationCollector,
};

/// A contact form that passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: ContactMessage,
}

/// The privacy checkbox is ticked in the browser and usually stripped before
/// posting. If a client does send it, it has to be `true`.
fn check_privacy_consent(consent: Option<bool>) -> Result<(), FieldViolation> {
    match consent {
        Some(false) => Err(FieldViolation::new(
            "privacy",
            "You must agree to the Privacy Policy and Terms of Service",
        )),
        _ => Ok(()),
    }
}

impl TryFrom<FormFields> for NewContactSubmission {
    type Error = ValidationError;

    fn try_from(mut fields: FormFields) -> Result<Self, Self::Error> {
        let mut collector = ViolationCollector::default();
        let name = collector.check(fields.required_string("name").and_then(SubmitterName::parse));
        let email =
            collector.check(fields.required_string("email").and_then(SubmitterEmail::parse));
        let company = collector.check(fields.optional_string("company"));
        let subject = collector.check(fields.optional_string("subject"));
        let message =
            collector.check(fields.required_string("message").and_then(ContactMessage::parse));
        collector.check(fields.optional_bool("privacy").and_then(check_privacy_consent));

        match (name, email, company, subject, message) {
            (Some(name), Some(email), Some(company), Some(subject), Some(message))
                if collector.is_empty() =>
            {
                Ok(Self {
                    name,
                    email,
                    company,
                    subject,
                    message,
                })
            }
            _ => Err(collector.into_error()),
        }
    }
}

/// A stored contact form submission.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: ContactMessage,
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(submission: NewContactSubmission, id: Uuid, created_at: DateTime<Utc>) -> Self {
        let NewContactSubmission {
            name,
            email,
            company,
            subject,
            message,
        } = submission;
        Self {
            id,
            name,
            email,
            company,
            subject,
            message,
            created_at,
        }
    }
}
