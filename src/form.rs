use crate::errors::ErrorSet;
use crate::record::{EntryRecord, Field};
use crate::validate::validate;

/// The entry form controller: the record being edited plus the errors left
/// by the last failed submit.
///
/// One instance lives inside an `RwSignal` at the page level; event handlers
/// mutate it through the signal's write guard, so every edit re-renders the
/// affected inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    record: EntryRecord,
    errors: ErrorSet,
}

impl EntryForm {
    pub fn record(&self) -> &EntryRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Current raw text of one field.
    pub fn value(&self, field: Field) -> &str {
        self.record.field(field)
    }

    /// Stores a new value for `field`. An error registered for that field is
    /// cleared the moment the user touches it; other fields' errors stay.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.record.set_field(field, value);
        self.errors.clear(field);
    }

    /// Validates the whole record. On success the completed entry is handed
    /// to the caller and the form resets. On failure the record stays as-is
    /// and the per-field errors are registered for display.
    pub fn submit(&mut self) -> Option<EntryRecord> {
        let errors = validate(&self.record);
        if errors.is_empty() {
            self.errors = ErrorSet::default();
            Some(std::mem::take(&mut self.record))
        } else {
            self.errors = errors;
            None
        }
    }

    /// Clears record and errors unconditionally.
    pub fn reset(&mut self) {
        *self = EntryForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn filled_form() -> EntryForm {
        let mut form = EntryForm::default();
        form.update_field(Field::Date, "2024-01-01".into());
        form.update_field(Field::Operator, "A".into());
        form.update_field(Field::Helper, "B".into());
        form.update_field(Field::Shift, "D".into());
        form.update_field(Field::DesignNo, "D1".into());
        form.update_field(Field::DesignStitch, "100".into());
        form.update_field(Field::ColorType, "CR".into());
        form
    }

    #[test]
    fn submit_of_valid_entry_yields_record_and_resets() {
        let mut form = filled_form();
        let entry = form.submit().expect("entry should be accepted");
        assert_eq!(entry.date, "2024-01-01");
        assert_eq!(entry.operator, "A");
        assert_eq!(entry.design_stitch, "100");
        assert_eq!(form, EntryForm::default());
    }

    #[test]
    fn submit_of_invalid_entry_keeps_record_and_registers_errors() {
        let mut form = filled_form();
        form.update_field(Field::DesignStitch, "-5".into());
        assert!(form.submit().is_none());

        //nothing was cleared
        assert_eq!(form.value(Field::DesignStitch), "-5");
        assert_eq!(form.value(Field::Operator), "A");

        //exactly the one failing field is reported
        assert_eq!(form.errors().len(), 1);
        assert_eq!(
            form.errors().message(Field::DesignStitch).as_deref(),
            Some("Design stitch must be a positive number")
        );
    }

    #[test]
    fn editing_a_field_clears_only_its_own_error() {
        let mut form = EntryForm::default();
        assert!(form.submit().is_none());
        assert_eq!(form.errors().len(), 7);

        form.update_field(Field::Operator, "A".into());
        assert!(form.errors().message(Field::Operator).is_none());
        assert_eq!(form.errors().len(), 6);

        //an unrelated edit leaves the rest of the errors in place
        form.update_field(Field::Helper, "B".into());
        assert_eq!(form.errors().len(), 5);
        assert!(form.errors().message(Field::Date).is_some());
        assert!(form.errors().message(Field::Shift).is_some());
    }

    #[test]
    fn editing_clears_the_error_without_revalidating() {
        let mut form = filled_form();
        form.update_field(Field::DesignStitch, "0".into());
        assert!(form.submit().is_none());

        //the new value is still bad, but the stale message goes away
        //until the next submit
        form.update_field(Field::DesignStitch, "-1".into());
        assert!(form.errors().is_empty());
        assert!(form.submit().is_none());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut form = filled_form();
        form.update_field(Field::Operator, String::new());
        assert!(form.submit().is_none());

        form.reset();
        assert_eq!(form, EntryForm::default());
        for field in Field::iter() {
            assert_eq!(form.value(field), "");
        }
        assert!(form.errors().is_empty());
    }
}
