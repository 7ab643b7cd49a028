use crate::record::Field;
use std::collections::BTreeMap;
use thiserror::Error;

/// One field failing validation. Expected and recoverable; rendered inline
/// next to the offending input and cleared as soon as the user edits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{subject} is required")]
    Required { subject: &'static str },
    #[error("Design stitch must be a positive number")]
    StitchNotPositive,
}

impl ValidationError {
    /// Required-field error carrying the field's message noun.
    pub fn required(field: Field) -> Self {
        ValidationError::Required {
            subject: field.subject(),
        }
    }
}

/// Per-field validation failures. Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    by_field: BTreeMap<Field, ValidationError>,
}

impl ErrorSet {
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.by_field.insert(field, error);
    }

    /// Drops the error registered for one field, leaving the rest alone.
    pub fn clear(&mut self, field: Field) {
        self.by_field.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.by_field.get(&field).copied()
    }

    /// Display message for one field, if it is currently failing.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }
}
