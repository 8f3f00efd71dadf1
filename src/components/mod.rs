//! UI Components
//!
//! Form screens and the widgets they share.

mod checklist_editor;
mod confirm_dialog;
mod field_error;
mod status_selector;
mod system_form;
mod task_form;

pub use checklist_editor::ChecklistTaskEditor;
pub use confirm_dialog::ConfirmDialog;
pub use field_error::FieldError;
pub use status_selector::StatusSelector;
pub use system_form::SystemForm;
pub use task_form::TaskForm;
