// Validation errors

use crate::{FieldName, Rule};
use std::fmt;
use thiserror::Error;

/// A rejected field, ready to show next to its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: FieldName,

    /// Message for the user
    pub message: String,

    /// Which rule rejected the value
    pub constraint: Rule,
}

impl ValidationError {
    pub fn new(field: FieldName, constraint: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            constraint,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// All rejected fields of one form, in declared field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// The error for the earliest field in form order.
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.iter().min_by_key(|e| e.field)
    }

    /// The error recorded for one field, if any.
    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// `{"errors": [{"field", "message", "constraint"}, ...]}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field.as_str(),
                    "message": e.message,
                    "constraint": e.constraint.as_str(),
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

/// Failures outside of per-field validation: malformed payloads and
/// snapshots that do not carry every field.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Field missing from form values: {0}")]
    MissingField(FieldName),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Field {field} must be a string or number, got {found}")]
    InvalidValue { field: FieldName, found: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid form data: {0}")]
    InvalidForm(String),

    #[error("Validation failed:\n{0}")]
    Rejected(ValidationErrors),
}
