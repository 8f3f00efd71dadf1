//! Checklist Task-Array Form Controller
//!
//! Editable list of checklist entries for one task list. Saving validates the
//! rows and logs the payload; no remote write is wired for checklists yet.

use crate::api::Navigator;
use crate::config::PanelConfig;
use crate::domain::{Identifier, TaskListEntry};
use crate::error::FormError;
use crate::form::{FieldValue, FormEvent, FormState};
use crate::schema::{
    ChecklistData, ChecklistSchema, ChecklistValues, EntryAction, EntryField, EntryValues,
};

#[derive(Debug)]
pub struct ChecklistFormController {
    state: FormState<ChecklistSchema>,
    task_list_id: Identifier,
}

impl ChecklistFormController {
    pub fn new(entries: &[TaskListEntry], task_list_id: Identifier) -> Self {
        Self {
            state: FormState::new(ChecklistValues::from_entries(entries, Some(task_list_id))),
            task_list_id,
        }
    }

    pub fn task_list_id(&self) -> Identifier {
        self.task_list_id
    }

    pub fn state(&self) -> &FormState<ChecklistSchema> {
        &self.state
    }

    pub fn entries(&self) -> &[EntryValues] {
        &self.state.values().tasks
    }

    pub fn error(&self, field: EntryField) -> Option<&str> {
        self.state.error(field)
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn edit(&mut self, field: EntryField, value: FieldValue) -> Result<(), FormError> {
        self.state.apply(FormEvent::Edit { field, value }).map(|_| ())
    }

    pub fn add_entry(&mut self) {
        let _ = self.state.apply(FormEvent::Action(EntryAction::Add));
    }

    pub fn remove_entry(&mut self, index: usize) {
        let _ = self.state.apply(FormEvent::Action(EntryAction::Remove(index)));
    }

    /// Validate the rows and log the payload
    pub fn submit(&mut self) -> Result<ChecklistData, FormError> {
        let data = self.state.submit()?;
        // TODO: send the payload once the task-list write endpoint exists.
        match serde_json::to_string(&data) {
            Ok(json) => log::info!("[CHECKLIST] task list {} payload: {}", self.task_list_id, json),
            Err(e) => log::warn!("[CHECKLIST] could not serialize payload: {}", e),
        }
        let _ = self.state.apply(FormEvent::Settled);
        Ok(data)
    }

    pub fn cancel(&self, navigator: &dyn Navigator, config: &PanelConfig) {
        navigator.push(&config.checklist_cards_route(self.task_list_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EntryInput;
    use crate::testing::RecordingNavigator;

    fn seeded() -> ChecklistFormController {
        let entries = vec![TaskListEntry {
            id: Some(1),
            task_list_id: Some(5),
            system_id: Some(2),
            checklist: "Check pressure".to_string(),
            frequency: "daily".to_string(),
            ..TaskListEntry::default()
        }];
        ChecklistFormController::new(&entries, 5)
    }

    #[test]
    fn test_seeded_rows_submit_without_network() {
        let mut form = seeded();
        let data = form.submit().unwrap();
        assert_eq!(data.tasks.len(), 1);
        assert_eq!(data.tasks[0].note, None);
        assert!(!form.is_loading());
    }

    #[test]
    fn test_new_row_must_be_filled_in() {
        let mut form = seeded();
        form.add_entry();
        assert_eq!(form.entries()[1].task_list_id, Some(5));

        let err = form.submit().unwrap_err();
        assert_eq!(err, FormError::Invalid { issues: 3 });
        assert!(form.error(EntryField::new(1, EntryInput::SystemId)).is_some());
        assert!(!form.is_loading());

        form.edit(EntryField::new(1, EntryInput::SystemId), FieldValue::text("2")).unwrap();
        form.edit(EntryField::new(1, EntryInput::Checklist), FieldValue::text("Drain tank")).unwrap();
        form.edit(EntryField::new(1, EntryInput::Frequency), FieldValue::text("weekly")).unwrap();
        form.edit(EntryField::new(1, EntryInput::Review), FieldValue::Flag(true)).unwrap();
        let data = form.submit().unwrap();
        assert!(data.tasks[1].review);
    }

    #[test]
    fn test_edit_of_missing_row_is_rejected() {
        let mut form = ChecklistFormController::new(&[], 5);
        let result = form.edit(EntryField::new(0, EntryInput::Note), FieldValue::text("x"));
        assert!(matches!(result, Err(FormError::FieldType(_))));
    }

    #[test]
    fn test_remove_entry() {
        let mut form = seeded();
        form.remove_entry(0);
        assert!(form.entries().is_empty());
        assert!(form.state().is_dirty());
    }

    #[test]
    fn test_cancel_returns_to_cards() {
        let nav = RecordingNavigator::default();
        seeded().cancel(&nav, &PanelConfig::default());
        assert_eq!(nav.routes(), ["/checklist/5/cards"]);
    }
}
