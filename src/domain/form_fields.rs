//! src/domain/form_fields.rs

use serde_json::{Map, Value};

use crate::domain::FieldViolation;

/// Raw, untrusted form payload: field name to JSON value.
///
/// Values are taken out field by field while a typed record is built;
/// whatever is left over is discarded with the payload.
#[derive(serde::Deserialize, Debug, Default, Clone)]
#[serde(transparent)]
pub struct FormFields(Map<String, Value>);

impl FormFields {
    /// A missing field and an explicit `null` both count as absent.
    fn take(&mut self, field: &str) -> Option<Value> {
        match self.0.remove(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn required_string(&mut self, field: &'static str) -> Result<String, FieldViolation> {
        self.optional_string(field)?
            .ok_or_else(|| FieldViolation::new(field, "Required"))
    }

    pub fn optional_string(
        &mut self,
        field: &'static str,
    ) -> Result<Option<String>, FieldViolation> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(FieldViolation::new(field, "Expected a string")),
        }
    }

    pub fn optional_bool(&mut self, field: &'static str) -> Result<Option<bool>, FieldViolation> {
        match self.take(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(_) => Err(FieldViolation::new(field, "Expected a boolean")),
        }
    }
}
