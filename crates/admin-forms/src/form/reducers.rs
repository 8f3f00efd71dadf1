use crate::error::FormError;

use super::{FormEvent, FormOutcome, FormSchema, FormState};

impl<S: FormSchema> FormState<S> {
    /// Single update function for the form
    ///
    /// Once the user has attempted a submit, edits re-validate the touched
    /// field so its message tracks the input.
    pub fn apply(&mut self, event: FormEvent<S>) -> Result<FormOutcome<S::Output>, FormError> {
        match event {
            FormEvent::Edit { field, value } => {
                if let Err(err) = S::set_field(&mut self.values, field, value) {
                    self.errors.set(field, err.message.clone());
                    return Err(err.into());
                }
                self.dirty = true;
                if self.submit_count > 0 {
                    self.revalidate_field(field);
                } else {
                    self.errors.remove(field);
                }
                Ok(FormOutcome::Updated)
            }
            FormEvent::Action(action) => {
                S::apply_action(&mut self.values, action);
                self.dirty = true;
                if self.submit_count > 0 {
                    self.revalidate_all();
                } else {
                    self.errors.clear();
                }
                Ok(FormOutcome::Updated)
            }
            FormEvent::Reset => {
                self.values = self.defaults.clone();
                self.errors.clear();
                self.dirty = false;
                self.submit_count = 0;
                Ok(FormOutcome::Updated)
            }
            FormEvent::Submit => self.submit().map(FormOutcome::Submitted),
            FormEvent::Begin => {
                if self.submitting {
                    return Err(FormError::Busy);
                }
                self.submitting = true;
                Ok(FormOutcome::Updated)
            }
            FormEvent::Settled => {
                self.submitting = false;
                Ok(FormOutcome::Updated)
            }
        }
    }

    /// [`FormEvent::Submit`], returning the payload directly
    pub fn submit(&mut self) -> Result<S::Output, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }
        let output = self.validate()?;
        self.submitting = true;
        Ok(output)
    }

    /// Check every field without starting a request
    pub fn validate(&mut self) -> Result<S::Output, FormError> {
        self.submit_count += 1;
        match S::validate(&self.values) {
            Ok(output) => {
                self.errors.clear();
                Ok(output)
            }
            Err(errors) => {
                let issues = errors.len();
                self.errors = errors;
                Err(FormError::Invalid { issues })
            }
        }
    }

    fn revalidate_field(&mut self, field: S::Field) {
        match S::validate(&self.values) {
            Ok(_) => {
                self.errors.remove(field);
            }
            Err(errors) => match errors.get(field) {
                Some(message) => self.errors.set(field, message),
                None => {
                    self.errors.remove(field);
                }
            },
        }
    }

    fn revalidate_all(&mut self) {
        self.errors = match S::validate(&self.values) {
            Ok(_) => Default::default(),
            Err(errors) => errors,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldValue;
    use crate::schema::{
        ChecklistSchema, ChecklistValues, EntryAction, EntryField, EntryInput, SystemField,
        SystemFormValues, SystemSchema,
    };

    fn system_state() -> FormState<SystemSchema> {
        FormState::new(SystemFormValues::default())
    }

    fn edit(field: SystemField, text: &str) -> FormEvent<SystemSchema> {
        FormEvent::Edit {
            field,
            value: FieldValue::text(text),
        }
    }

    #[test]
    fn test_edit_marks_dirty_without_validating() {
        let mut state = system_state();
        state.apply(edit(SystemField::Name, "A")).unwrap();
        assert!(state.is_dirty());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_invalid_submit_records_errors_and_stays_idle() {
        let mut state = system_state();
        let result = state.apply(FormEvent::Submit);
        assert_eq!(result, Err(FormError::Invalid { issues: 1 }));
        assert!(state.error(SystemField::Name).is_some());
        assert!(!state.is_submitting());
        assert_eq!(state.submit_count(), 1);
    }

    #[test]
    fn test_edit_after_failed_submit_revalidates_field() {
        let mut state = system_state();
        let _ = state.apply(FormEvent::Submit);
        state.apply(edit(SystemField::Name, "Chiller")).unwrap();
        assert!(state.error(SystemField::Name).is_none());
        state.apply(edit(SystemField::Name, "Ch")).unwrap();
        assert!(state.error(SystemField::Name).is_some());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_busy() {
        let mut state = system_state();
        state.apply(edit(SystemField::Name, "Chiller")).unwrap();
        let first = state.apply(FormEvent::Submit).unwrap();
        assert!(matches!(first, FormOutcome::Submitted(_)));
        assert_eq!(state.apply(FormEvent::Submit), Err(FormError::Busy));
        assert_eq!(state.apply(FormEvent::Begin), Err(FormError::Busy));
        state.apply(FormEvent::Settled).unwrap();
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_bad_flag_input_is_reported_on_field() {
        let mut state = system_state();
        let result = state.apply(edit(SystemField::Status, "sometimes"));
        assert!(matches!(result, Err(FormError::FieldType(_))));
        assert!(state.error(SystemField::Status).is_some());
        assert!(state.values().status);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = system_state();
        state.apply(edit(SystemField::Name, "Chiller")).unwrap();
        state.apply(edit(SystemField::Status, "false")).unwrap();
        state.apply(FormEvent::Reset).unwrap();
        assert_eq!(state.values(), state.defaults());
        assert!(!state.is_dirty());
        assert_eq!(state.submit_count(), 0);
    }

    #[test]
    fn test_row_removal_revalidates_after_submit() {
        let mut state: FormState<ChecklistSchema> =
            FormState::new(ChecklistValues::from_entries(&[], Some(1)));
        state.apply(FormEvent::Action(EntryAction::Add)).unwrap();
        let _ = state.validate();
        assert!(state.error(EntryField::new(0, EntryInput::Checklist)).is_some());
        state.apply(FormEvent::Action(EntryAction::Remove(0))).unwrap();
        assert!(state.errors().is_empty());
    }
}
