//! Checklist Entities
//!
//! A task list groups checklist entries recorded for one inspection.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Identifier};

/// One row of a checklist
///
/// Absent text and flags fall back to empty strings and `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    pub task_list_id: Option<Identifier>,
    pub system_id: Option<Identifier>,
    pub checklist: String,
    pub frequency: String,
    pub review: bool,
    pub note: String,
    pub status: bool,
}

impl Entity for TaskListEntry {
    fn id(&self) -> Option<Identifier> {
        self.id
    }
}

/// Header of a checklist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub coordinates: Option<String>,
}

impl Entity for TaskList {
    fn id(&self) -> Option<Identifier> {
        self.id
    }
}
