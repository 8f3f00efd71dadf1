//! Task Form Controller
//!
//! Create/edit flow for one task: systems reference list on mount, validation
//! on submit, save-or-update, then navigation to the task listing.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::api::{Navigator, TaskApi};
use crate::config::{PanelConfig, DEFAULT_DATE_FORMAT};
use crate::domain::{FormMode, Identifier, System, Task};
use crate::error::{ApiError, ApiResult, FormError};
use crate::form::{FieldValue, FormEvent, FormState};
use crate::schema::{TaskField, TaskFormData, TaskFormValues, TaskSchema};

/// A validated request ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSubmission {
    pub data: TaskFormData,
    /// `None` creates a new task
    pub id: Option<Identifier>,
}

impl TaskSubmission {
    pub async fn send(&self, api: &dyn TaskApi) -> ApiResult<Task> {
        api.save_or_update_task(&self.data, self.id).await
    }
}

#[derive(Debug)]
pub struct TaskFormController {
    state: FormState<TaskSchema>,
    mode: FormMode,
    systems: Vec<System>,
    loading_systems: bool,
    submit_error: Option<String>,
}

impl TaskFormController {
    pub fn new(existing: Option<&Task>) -> Self {
        Self {
            state: FormState::new(TaskFormValues::from_record(existing)),
            mode: FormMode::for_record(existing),
            systems: Vec::new(),
            loading_systems: false,
            submit_error: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn state(&self) -> &FormState<TaskSchema> {
        &self.state
    }

    pub fn values(&self) -> &TaskFormValues {
        self.state.values()
    }

    pub fn error(&self, field: TaskField) -> Option<&str> {
        self.state.error(field)
    }

    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    /// Last failed save, cleared on the next submit
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_loading_systems(&self) -> bool {
        self.loading_systems
    }

    /// Submit button disabled
    pub fn is_busy(&self) -> bool {
        self.loading_systems || self.state.is_submitting()
    }

    /// Heading, e.g. "Edit task 2026-10-18"
    ///
    /// A date format chrono cannot render falls back to `%Y-%m-%d`.
    pub fn title(&self, today: NaiveDate, config: &PanelConfig) -> String {
        let action = if self.mode.is_edit() { "Edit task" } else { "Add task" };
        let mut title = format!("{} ", action);
        if write!(title, "{}", today.format(&config.date_format)).is_err() {
            log::warn!("[TASK_FORM] bad date format {:?}", config.date_format);
            title.truncate(action.len() + 1);
            let _ = write!(title, "{}", today.format(DEFAULT_DATE_FORMAT));
        }
        title
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit task"
        } else {
            "Add task"
        }
    }

    pub fn edit(&mut self, field: TaskField, value: FieldValue) -> Result<(), FormError> {
        self.state.apply(FormEvent::Edit { field, value }).map(|_| ())
    }

    pub fn begin_systems_load(&mut self) {
        self.loading_systems = true;
    }

    /// Apply the mount fetch; a failure leaves the list empty
    pub fn apply_systems(&mut self, result: ApiResult<Vec<System>>) {
        self.loading_systems = false;
        match result {
            Ok(systems) => {
                log::debug!("[TASK_FORM] loaded {} systems", systems.len());
                self.systems = systems;
            }
            Err(e) => {
                log::warn!("[TASK_FORM] failed to load systems: {}", e);
                self.systems.clear();
            }
        }
    }

    /// Validate and mark the form as submitting
    pub fn begin_submit(&mut self) -> Result<TaskSubmission, FormError> {
        if self.loading_systems {
            return Err(FormError::Busy);
        }
        let data = self.state.submit()?;
        self.submit_error = None;
        Ok(TaskSubmission {
            data,
            id: self.mode.id(),
        })
    }

    /// Settle the request; navigates to the listing only when the task was saved
    pub fn finish_submit(
        &mut self,
        result: ApiResult<Task>,
        navigator: &dyn Navigator,
        config: &PanelConfig,
    ) -> Result<Task, ApiError> {
        let _ = self.state.apply(FormEvent::Settled);
        match result {
            Ok(task) => {
                log::info!("[TASK_FORM] saved task {:?}", task.id);
                navigator.push(&config.task_listing_route);
                Ok(task)
            }
            Err(e) => {
                log::error!("[TASK_FORM] save failed: {}", e);
                self.submit_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Full submit: validate, send, settle
    pub async fn submit(
        &mut self,
        api: &dyn TaskApi,
        navigator: &dyn Navigator,
        config: &PanelConfig,
    ) -> Result<Task, TaskSubmitError> {
        let submission = self.begin_submit()?;
        let result = submission.send(api).await;
        Ok(self.finish_submit(result, navigator, config)?)
    }

    pub fn cancel(&self, navigator: &dyn Navigator, config: &PanelConfig) {
        navigator.push(&config.task_listing_route);
    }
}

/// Why [`TaskFormController::submit`] did not produce a saved task
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskSubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
