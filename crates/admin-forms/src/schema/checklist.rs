//! Checklist schemas: the array of checklist entries and the task-list header.

use std::convert::Infallible;
use std::fmt;

use serde::Serialize;

use crate::domain::{Identifier, TaskList, TaskListEntry};
use crate::error::FieldCoercionError;
use crate::form::{FieldErrors, FieldValue, FormSchema};

use super::rules::{optional_text, Checker, TextRule};

const CHECKLIST: TextRule = TextRule::MinLength {
    min: 2,
    message: "Checklist text must be at least 2 characters.",
};
const FREQUENCY: TextRule = TextRule::MinLength {
    min: 2,
    message: "Frequency must be at least 2 characters.",
};
const LIST_NAME: TextRule = TextRule::MinLength {
    min: 2,
    message: "Name must be at least 2 characters.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryInput {
    TaskListId,
    SystemId,
    Checklist,
    Frequency,
    Review,
    Note,
    Status,
}

impl EntryInput {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryInput::TaskListId => "task_list_id",
            EntryInput::SystemId => "system_id",
            EntryInput::Checklist => "checklist",
            EntryInput::Frequency => "frequency",
            EntryInput::Review => "review",
            EntryInput::Note => "note",
            EntryInput::Status => "status",
        }
    }
}

/// A field of the `index`-th entry, displayed as `tasks[index].name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryField {
    pub index: usize,
    pub input: EntryInput,
}

impl EntryField {
    pub fn new(index: usize, input: EntryInput) -> Self {
        Self { index, input }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tasks[{}].{}", self.index, self.input.as_str())
    }
}

/// Raw inputs of one entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryValues {
    pub id: Option<Identifier>,
    pub task_list_id: Option<Identifier>,
    pub system_id: Option<Identifier>,
    pub checklist: String,
    pub frequency: String,
    pub review: bool,
    pub note: String,
    pub status: bool,
}

impl From<&TaskListEntry> for EntryValues {
    fn from(entry: &TaskListEntry) -> Self {
        Self {
            id: entry.id,
            task_list_id: entry.task_list_id,
            system_id: entry.system_id,
            checklist: entry.checklist.clone(),
            frequency: entry.frequency.clone(),
            review: entry.review,
            note: entry.note.clone(),
            status: entry.status,
        }
    }
}

/// Raw inputs of the whole checklist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistValues {
    /// Owning task list; stamped on rows added in the editor
    pub task_list_id: Option<Identifier>,
    pub tasks: Vec<EntryValues>,
}

impl ChecklistValues {
    pub fn from_entries(entries: &[TaskListEntry], task_list_id: Option<Identifier>) -> Self {
        Self {
            task_list_id,
            tasks: entries.iter().map(EntryValues::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistEntryData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    pub task_list_id: Identifier,
    pub system_id: Identifier,
    pub checklist: String,
    pub frequency: String,
    pub review: bool,
    pub note: Option<String>,
    pub status: bool,
}

/// Validated checklist payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistData {
    pub tasks: Vec<ChecklistEntryData>,
}

/// Row operations of the checklist editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Add,
    Remove(usize),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChecklistSchema;

impl ChecklistSchema {
    fn check_entry(
        index: usize,
        entry: &EntryValues,
        checker: &mut Checker<EntryField>,
    ) -> Option<ChecklistEntryData> {
        let field = |input| EntryField::new(index, input);
        let task_list_id = checker.required(
            field(EntryInput::TaskListId),
            entry.task_list_id,
            "Task list is required",
        );
        let system_id = checker.required(field(EntryInput::SystemId), entry.system_id, "System is required");
        let checklist_ok = checker.text(field(EntryInput::Checklist), &entry.checklist, CHECKLIST);
        let frequency_ok = checker.text(field(EntryInput::Frequency), &entry.frequency, FREQUENCY);
        if !(checklist_ok && frequency_ok) {
            return None;
        }
        Some(ChecklistEntryData {
            id: entry.id,
            task_list_id: task_list_id?,
            system_id: system_id?,
            checklist: entry.checklist.clone(),
            frequency: entry.frequency.clone(),
            review: entry.review,
            note: optional_text(&entry.note),
            status: entry.status,
        })
    }
}

impl FormSchema for ChecklistSchema {
    type Field = EntryField;
    type Values = ChecklistValues;
    type Output = ChecklistData;
    type Action = EntryAction;

    fn set_field(
        values: &mut ChecklistValues,
        field: EntryField,
        value: FieldValue,
    ) -> Result<(), FieldCoercionError> {
        let Some(entry) = values.tasks.get_mut(field.index) else {
            return Err(FieldCoercionError::new(field.to_string(), "no such entry"));
        };
        match field.input {
            EntryInput::TaskListId => entry.task_list_id = value.into_id(field)?,
            EntryInput::SystemId => entry.system_id = value.into_id(field)?,
            EntryInput::Checklist => entry.checklist = value.into_text(field)?,
            EntryInput::Frequency => entry.frequency = value.into_text(field)?,
            EntryInput::Review => entry.review = value.into_flag(field)?,
            EntryInput::Note => entry.note = value.into_text(field)?,
            EntryInput::Status => entry.status = value.into_flag(field)?,
        }
        Ok(())
    }

    fn apply_action(values: &mut ChecklistValues, action: EntryAction) {
        match action {
            EntryAction::Add => values.tasks.push(EntryValues {
                task_list_id: values.task_list_id,
                ..EntryValues::default()
            }),
            EntryAction::Remove(index) => {
                if index < values.tasks.len() {
                    values.tasks.remove(index);
                }
            }
        }
    }

    fn validate(values: &ChecklistValues) -> Result<ChecklistData, FieldErrors<EntryField>> {
        let mut checker = Checker::new();
        let tasks: Vec<Option<ChecklistEntryData>> = values
            .tasks
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::check_entry(index, entry, &mut checker))
            .collect();
        checker.finish(|| {
            tasks
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .map(|tasks| ChecklistData { tasks })
        })
    }
}

// ========================
// Task-list header
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskListField {
    Name,
    Description,
    Date,
    Status,
    Location,
    Coordinates,
}

impl fmt::Display for TaskListField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskListField::Name => "name",
            TaskListField::Description => "description",
            TaskListField::Date => "date",
            TaskListField::Status => "status",
            TaskListField::Location => "location",
            TaskListField::Coordinates => "coordinates",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListValues {
    pub name: String,
    pub description: String,
    pub date: String,
    pub status: bool,
    pub location: String,
    pub coordinates: String,
}

impl From<&TaskList> for TaskListValues {
    fn from(list: &TaskList) -> Self {
        Self {
            name: list.name.clone(),
            description: list.description.clone().unwrap_or_default(),
            date: list.date.clone().unwrap_or_default(),
            status: list.status.unwrap_or(false),
            location: list.location.clone().unwrap_or_default(),
            coordinates: list.coordinates.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskListData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskListSchema;

impl FormSchema for TaskListSchema {
    type Field = TaskListField;
    type Values = TaskListValues;
    type Output = TaskListData;
    type Action = Infallible;

    fn set_field(
        values: &mut TaskListValues,
        field: TaskListField,
        value: FieldValue,
    ) -> Result<(), FieldCoercionError> {
        match field {
            TaskListField::Name => values.name = value.into_text(field)?,
            TaskListField::Description => values.description = value.into_text(field)?,
            TaskListField::Date => values.date = value.into_text(field)?,
            TaskListField::Status => values.status = value.into_flag(field)?,
            TaskListField::Location => values.location = value.into_text(field)?,
            TaskListField::Coordinates => values.coordinates = value.into_text(field)?,
        }
        Ok(())
    }

    fn apply_action(_values: &mut TaskListValues, action: Infallible) {
        match action {}
    }

    fn validate(values: &TaskListValues) -> Result<TaskListData, FieldErrors<TaskListField>> {
        let mut checker = Checker::new();
        checker.text(TaskListField::Name, &values.name, LIST_NAME);
        checker.finish(|| {
            Some(TaskListData {
                name: values.name.clone(),
                description: optional_text(&values.description),
                date: optional_text(&values.date),
                status: values.status,
                location: optional_text(&values.location),
                coordinates: optional_text(&values.coordinates),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(checklist: &str) -> EntryValues {
        EntryValues {
            task_list_id: Some(9),
            system_id: Some(2),
            checklist: checklist.to_string(),
            frequency: "daily".to_string(),
            ..EntryValues::default()
        }
    }

    #[test]
    fn test_short_checklist_text_rejected_at_index() {
        let values = ChecklistValues {
            task_list_id: Some(9),
            tasks: vec![entry("Check oil"), entry("x")],
        };
        let errors = ChecklistSchema::validate(&values).unwrap_err();
        let field = EntryField::new(1, EntryInput::Checklist);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(field));
        assert_eq!(field.to_string(), "tasks[1].checklist");
    }

    #[test]
    fn test_added_entry_inherits_task_list() {
        let mut values = ChecklistValues::from_entries(&[], Some(9));
        ChecklistSchema::apply_action(&mut values, EntryAction::Add);
        assert_eq!(values.tasks.len(), 1);
        assert_eq!(values.tasks[0].task_list_id, Some(9));
        ChecklistSchema::apply_action(&mut values, EntryAction::Remove(5));
        assert_eq!(values.tasks.len(), 1);
    }

    #[test]
    fn test_entry_without_system_rejected() {
        let mut row = entry("Check oil");
        row.system_id = None;
        let values = ChecklistValues {
            task_list_id: Some(9),
            tasks: vec![row],
        };
        let errors = ChecklistSchema::validate(&values).unwrap_err();
        assert_eq!(
            errors.get(EntryField::new(0, EntryInput::SystemId)),
            Some("System is required")
        );
    }

    #[test]
    fn test_empty_checklist_is_valid() {
        let data = ChecklistSchema::validate(&ChecklistValues::default()).unwrap();
        assert!(data.tasks.is_empty());
    }

    #[test]
    fn test_task_list_name_min_length() {
        let values = TaskListValues {
            name: "A".to_string(),
            ..TaskListValues::default()
        };
        let errors = TaskListSchema::validate(&values).unwrap_err();
        assert_eq!(errors.get(TaskListField::Name), Some("Name must be at least 2 characters."));

        let list = TaskList {
            name: "North plant".to_string(),
            location: Some("Lima".to_string()),
            ..TaskList::default()
        };
        let data = TaskListSchema::validate(&TaskListValues::from(&list)).unwrap();
        assert_eq!(data.location.as_deref(), Some("Lima"));
        assert_eq!(data.description, None);
    }
}
