//! src/domain/mod.rs

mod contact_message;
mod contact_submission;
mod form_fields;
mod newsletter_subscription;
mod submitter_email;
mod submitter_name;

pub use contact_message::ContactMessage;
pub use contact_submission::{ContactSubmission, NewContactSubmission};
pub use form_fields::FormFields;
pub use newsletter_subscription::{NewNewsletterSubscription, NewsletterSubscription};
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;

/// A single rule violation, tied to the form field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validation error for submitted form data.
///
/// Lists every violated field in the order the fields are declared,
/// never only the first one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// check if `field` failed at least one rule
    pub fn names(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl From<FieldViolation> for ValidationError {
    fn from(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

/// Gathers violations while a whole form is checked field by field.
#[derive(Default)]
pub(crate) struct ViolationCollector {
    violations: Vec<FieldViolation>,
}

impl ViolationCollector {
    pub(crate) fn check<T>(&mut self, outcome: Result<T, FieldViolation>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(violation) => {
                self.violations.push(violation);
                None
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError {
            violations: self.violations,
        }
    }
}
