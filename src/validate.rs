//! Submit-time validation rules for a production entry.
//!
//! Each field is checked on its own; there are no cross-field rules.

use crate::errors::{ErrorSet, ValidationError};
use crate::record::{ColorType, EntryRecord, Field, Shift};
use strum::IntoEnumIterator;

/// Checks every field of `record` and returns the failing ones.
///
/// Pure: the record is not modified and nothing is logged. An empty
/// `ErrorSet` means the entry is ready to hand off.
pub fn validate(record: &EntryRecord) -> ErrorSet {
    let mut errors = ErrorSet::default();
    for field in Field::iter() {
        if let Some(error) = check_field(field, record.field(field)) {
            errors.insert(field, error);
        }
    }
    errors
}

/// Rule for one field. `None` means the value is acceptable.
fn check_field(field: Field, value: &str) -> Option<ValidationError> {
    match field {
        // Dropdowns must hold one of their codes; anything else (including
        // the blank prompt option) counts as unset.
        Field::Shift => value
            .parse::<Shift>()
            .is_err()
            .then_some(ValidationError::required(field)),
        Field::ColorType => value
            .parse::<ColorType>()
            .is_err()
            .then_some(ValidationError::required(field)),
        Field::DesignStitch => {
            let value = value.trim();
            if value.is_empty() {
                Some(ValidationError::required(field))
            } else if !is_positive_number(value) {
                Some(ValidationError::StitchNotPositive)
            } else {
                None
            }
        }
        _ => value
            .trim()
            .is_empty()
            .then_some(ValidationError::required(field)),
    }
}

/// Accepts any number literal greater than zero ("100", "2.5"); rejects
/// zero, negatives, and non-numbers.
fn is_positive_number(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(|n| n > 0.0)
}
