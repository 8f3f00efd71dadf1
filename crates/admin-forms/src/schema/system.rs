//! System schema: name, description and active flag.

use std::convert::Infallible;
use std::fmt;

use serde::Serialize;

use crate::domain::System;
use crate::error::FieldCoercionError;
use crate::form::{FieldErrors, FieldValue, FormSchema};

use super::rules::{optional_text, Checker, TextRule};

const NAME: TextRule = TextRule::MinLength {
    min: 3,
    message: "The name must be at least 3 characters long",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SystemField {
    Name,
    Description,
    Status,
}

impl fmt::Display for SystemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SystemField::Name => "name",
            SystemField::Description => "description",
            SystemField::Status => "status",
        })
    }
}

/// Raw system inputs
#[derive(Debug, Clone, PartialEq)]
pub struct SystemFormValues {
    pub name: String,
    pub description: String,
    pub status: bool,
}

impl Default for SystemFormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: true,
        }
    }
}

impl SystemFormValues {
    /// Seed values from an existing record; new systems start active
    pub fn from_record(record: Option<&System>) -> Self {
        match record {
            Some(system) => Self {
                name: system.name.clone(),
                description: system.description.clone().unwrap_or_default(),
                status: system.status,
            },
            None => Self::default(),
        }
    }

    /// Value of the status `<select>`
    pub fn status_str(&self) -> &'static str {
        if self.status {
            "true"
        } else {
            "false"
        }
    }
}

/// Payload sent to `save_system` / `update_system`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemFormData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSchema;

impl FormSchema for SystemSchema {
    type Field = SystemField;
    type Values = SystemFormValues;
    type Output = SystemFormData;
    type Action = Infallible;

    fn set_field(
        values: &mut SystemFormValues,
        field: SystemField,
        value: FieldValue,
    ) -> Result<(), FieldCoercionError> {
        match field {
            SystemField::Name => values.name = value.into_text(field)?,
            SystemField::Description => values.description = value.into_text(field)?,
            SystemField::Status => values.status = value.into_flag(field)?,
        }
        Ok(())
    }

    fn apply_action(_values: &mut SystemFormValues, action: Infallible) {
        match action {}
    }

    fn validate(values: &SystemFormValues) -> Result<SystemFormData, FieldErrors<SystemField>> {
        let mut checker = Checker::new();
        checker.text(SystemField::Name, &values.name, NAME);
        checker.finish(|| {
            Some(SystemFormData {
                name: values.name.clone(),
                description: optional_text(&values.description),
                status: values.status,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_rejected() {
        let values = SystemFormValues {
            name: "AB".to_string(),
            ..SystemFormValues::default()
        };
        let errors = SystemSchema::validate(&values).unwrap_err();
        assert_eq!(
            errors.get(SystemField::Name),
            Some("The name must be at least 3 characters long")
        );
    }

    #[test]
    fn test_inactive_record_keeps_status() {
        let record = System {
            id: Some(1),
            name: "Boiler".to_string(),
            description: None,
            status: false,
        };
        let values = SystemFormValues::from_record(Some(&record));
        assert!(!values.status);
        assert_eq!(values.status_str(), "false");
        assert!(SystemFormValues::from_record(None).status);
    }
}
