//! src/domain/contact_message.rs

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::FieldViolation;

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    const MIN_LENGTH: usize = 10;

    pub fn parse(s: String) -> Result<ContactMessage, FieldViolation> {
        if s.graphemes(true).count() < Self::MIN_LENGTH {
            Err(FieldViolation::new(
                "message",
                format!("Message must be at least {} characters", Self::MIN_LENGTH),
            ))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
