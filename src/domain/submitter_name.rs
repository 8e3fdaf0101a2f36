//! src/domain/submitter_name.rs

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::FieldViolation;

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmitterName(String);

impl SubmitterName {
    const MIN_LENGTH: usize = 2;

    /// Returns an instance of `SubmitterName` if the input has at least
    /// two characters (grapheme clusters), a `FieldViolation` otherwise.
    pub fn parse(s: String) -> Result<SubmitterName, FieldViolation> {
        if s.graphemes(true).count() < Self::MIN_LENGTH {
            Err(FieldViolation::new(
                "name",
                format!("Name must be at least {} characters", Self::MIN_LENGTH),
            ))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
