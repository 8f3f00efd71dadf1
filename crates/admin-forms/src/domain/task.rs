//! Task Entity
//!
//! A recurring maintenance task attached to a system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Identifier};

/// Task outcome as shown in the status selector
///
/// The record stores a boolean; forms and payloads carry it as the
/// strings `"true"` / `"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "true")]
    Passed,
    #[serde(rename = "false")]
    Failed,
}

impl TaskStatus {
    pub const OPTIONS: [TaskStatus; 2] = [TaskStatus::Passed, TaskStatus::Failed];

    pub fn from_bool(value: bool) -> Self {
        if value {
            TaskStatus::Passed
        } else {
            TaskStatus::Failed
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, TaskStatus::Passed)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Passed => "true",
            TaskStatus::Failed => "false",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            TaskStatus::Passed => "OK",
            TaskStatus::Failed => "NOK",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(TaskStatus::Passed),
            "false" => Ok(TaskStatus::Failed),
            other => Err(format!("unknown task status: {}", other)),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task record as returned by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    pub description: String,
    pub status: bool,
    pub frequency: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub system_id: Identifier,
    #[serde(default)]
    pub date: Option<String>,
}

impl Entity for Task {
    fn id(&self) -> Option<Identifier> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormMode;

    #[test]
    fn test_status_string_mapping() {
        assert_eq!(TaskStatus::from_bool(true).as_str(), "true");
        assert_eq!(TaskStatus::from_bool(false).as_str(), "false");
        assert_eq!("true".parse::<TaskStatus>(), Ok(TaskStatus::Passed));
        assert!("yes".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_as_string() {
        let json = serde_json::to_string(&TaskStatus::Passed).unwrap();
        assert_eq!(json, "\"true\"");
        let back: TaskStatus = serde_json::from_str("\"false\"").unwrap();
        assert_eq!(back, TaskStatus::Failed);
    }

    #[test]
    fn test_form_mode_follows_id() {
        let json = r#"{"description":"Check pumps","status":true,"frequency":"daily","system_id":2}"#;
        let mut task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.form_mode(), FormMode::Create);
        task.id = Some(7);
        assert_eq!(task.form_mode(), FormMode::Edit(7));
        assert_eq!(FormMode::for_record::<Task>(None), FormMode::Create);
    }
}
