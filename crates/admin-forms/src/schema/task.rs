//! Task schema: description, status, frequency, notes, system and date.

use std::convert::Infallible;
use std::fmt;

use serde::Serialize;

use crate::domain::{Identifier, Task, TaskStatus};
use crate::error::FieldCoercionError;
use crate::form::{FieldErrors, FieldValue, FormSchema};

use super::rules::{optional_text, Checker, TextRule};

const DESCRIPTION: TextRule = TextRule::MinLength {
    min: 1,
    message: "Description is required",
};
const FREQUENCY: TextRule = TextRule::MinLength {
    min: 1,
    message: "Frequency is required",
};
const STATUS: TextRule = TextRule::OneOf {
    options: &["true", "false"],
    required: "Status is required",
    message: "Status must be OK or NOK",
};
const SYSTEM_REQUIRED: &str = "System is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    SystemId,
    Description,
    Status,
    Frequency,
    Notes,
    Date,
}

impl TaskField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::SystemId => "system_id",
            TaskField::Description => "description",
            TaskField::Status => "status",
            TaskField::Frequency => "frequency",
            TaskField::Notes => "notes",
            TaskField::Date => "date",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw task inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFormValues {
    pub description: String,
    /// `"true"`, `"false"` or blank
    pub status: String,
    pub frequency: String,
    pub notes: String,
    pub system_id: Option<Identifier>,
    pub date: Option<String>,
}

impl TaskFormValues {
    /// Seed values from an existing record; a missing or false status shows as `"false"`
    pub fn from_record(record: Option<&Task>) -> Self {
        match record {
            Some(task) => Self {
                description: task.description.clone(),
                status: TaskStatus::from_bool(task.status).as_str().to_string(),
                frequency: task.frequency.clone(),
                notes: task.notes.clone().unwrap_or_default(),
                system_id: Some(task.system_id),
                date: task.date.clone(),
            },
            None => Self {
                status: TaskStatus::Failed.as_str().to_string(),
                ..Self::default()
            },
        }
    }
}

/// Payload sent to `save_or_update_task`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskFormData {
    pub description: String,
    pub status: TaskStatus,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub system_id: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TaskSchema;

impl TaskSchema {
    pub fn check(values: &TaskFormValues, checker: &mut Checker<TaskField>) -> Option<TaskFormData> {
        let system_id = checker.required(TaskField::SystemId, values.system_id, SYSTEM_REQUIRED);
        checker.text(TaskField::Description, &values.description, DESCRIPTION);
        let status_ok = checker.text(TaskField::Status, &values.status, STATUS);
        checker.text(TaskField::Frequency, &values.frequency, FREQUENCY);

        let status = if status_ok {
            values.status.parse::<TaskStatus>().ok()
        } else {
            None
        };
        Some(TaskFormData {
            description: values.description.clone(),
            status: status?,
            frequency: values.frequency.clone(),
            notes: optional_text(&values.notes),
            system_id: system_id?,
            date: values.date.clone().filter(|date| !date.is_empty()),
        })
    }
}

impl FormSchema for TaskSchema {
    type Field = TaskField;
    type Values = TaskFormValues;
    type Output = TaskFormData;
    type Action = Infallible;

    fn set_field(
        values: &mut TaskFormValues,
        field: TaskField,
        value: FieldValue,
    ) -> Result<(), FieldCoercionError> {
        match field {
            TaskField::SystemId => values.system_id = value.into_id(field)?,
            TaskField::Description => values.description = value.into_text(field)?,
            TaskField::Status => {
                values.status = match value {
                    FieldValue::Flag(flag) => TaskStatus::from_bool(flag).as_str().to_string(),
                    other => other.into_text(field)?,
                }
            }
            TaskField::Frequency => values.frequency = value.into_text(field)?,
            TaskField::Notes => values.notes = value.into_text(field)?,
            TaskField::Date => values.date = optional_text(&value.into_text(field)?),
        }
        Ok(())
    }

    fn apply_action(_values: &mut TaskFormValues, action: Infallible) {
        match action {}
    }

    fn validate(values: &TaskFormValues) -> Result<TaskFormData, FieldErrors<TaskField>> {
        let mut checker = Checker::new();
        let data = Self::check(values, &mut checker);
        checker.finish(|| data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> TaskFormValues {
        TaskFormValues {
            description: "Inspect valves".to_string(),
            status: "true".to_string(),
            frequency: "weekly".to_string(),
            notes: String::new(),
            system_id: Some(3),
            date: None,
        }
    }

    #[test]
    fn test_valid_values_build_payload() {
        let data = TaskSchema::validate(&valid_values()).expect("valid");
        assert_eq!(data.status, TaskStatus::Passed);
        assert_eq!(data.system_id, 3);
        assert_eq!(data.notes, None);
    }

    #[test]
    fn test_each_required_field_reports_error() {
        let values = TaskFormValues {
            description: String::new(),
            frequency: String::new(),
            system_id: None,
            ..valid_values()
        };
        let errors = TaskSchema::validate(&values).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(TaskField::Description), Some("Description is required"));
        assert_eq!(errors.get(TaskField::Frequency), Some("Frequency is required"));
        assert_eq!(errors.get(TaskField::SystemId), Some("System is required"));
    }

    #[test]
    fn test_status_must_be_enum_string() {
        let values = TaskFormValues {
            status: "pending".to_string(),
            ..valid_values()
        };
        let errors = TaskSchema::validate(&values).unwrap_err();
        assert_eq!(errors.get(TaskField::Status), Some("Status must be OK or NOK"));
    }

    #[test]
    fn test_create_mode_defaults_status_to_false() {
        let values = TaskFormValues::from_record(None);
        assert_eq!(values.status, "false");
        assert_eq!(values.system_id, None);
    }

    #[test]
    fn test_payload_serializes_status_as_string() {
        let data = TaskSchema::validate(&valid_values()).unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["status"], "true");
        assert!(json.get("notes").is_none());
    }
}
