//! Field Schemas
//!
//! Declarative validation for each record the panel edits. Validation is
//! structural only: presence, length and enum membership.

mod checklist;
mod rules;
mod system;
mod task;

pub use checklist::{
    ChecklistData, ChecklistEntryData, ChecklistSchema, ChecklistValues, EntryAction, EntryField,
    EntryInput, EntryValues, TaskListData, TaskListField, TaskListSchema, TaskListValues,
};
pub use rules::{Checker, TextRule};
pub use system::{SystemField, SystemFormData, SystemFormValues, SystemSchema};
pub use task::{TaskField, TaskFormData, TaskFormValues, TaskSchema};
