//! Checklist Admin Forms
//!
//! Platform-independent core of the admin panel screens.
//!
//! Layered architecture:
//! - domain: records exchanged with the remote API
//! - schema: field schemas and validation
//! - form: typed form state driven by a single reducer
//! - api: collaborator traits (remote API, navigation)
//! - controllers: task, system and checklist form flows

pub mod api;
pub mod checklist_form;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod loader;
pub mod schema;
pub mod system_form;
pub mod task_form;

#[cfg(test)]
mod testing;

pub use api::{Navigator, SystemApi, SystemsApi, TaskApi};
pub use checklist_form::ChecklistFormController;
pub use config::PanelConfig;
pub use domain::{Entity, FormMode, Identifier, System, Task, TaskList, TaskListEntry, TaskStatus};
pub use error::{ApiError, ApiResult, ConfigError, FieldCoercionError, FormError};
pub use form::{FieldErrors, FieldValue, FormEvent, FormSchema, FormState};
pub use system_form::{SystemFormController, SystemSaveOutcome, SystemSubmission};
pub use task_form::{TaskFormController, TaskSubmission, TaskSubmitError};
