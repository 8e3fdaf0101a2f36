//! src/domain/submitter_email.rs

use validator::ValidateEmail;

use crate::domain::FieldViolation;

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    pub fn parse(s: String) -> Result<SubmitterEmail, FieldViolation> {
        if s.validate_email() {
            Ok(Self(s))
        } else {
            Err(FieldViolation::new("email", "Please enter a valid email"))
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
