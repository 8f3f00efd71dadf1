//! System Form Controller
//!
//! Two-step flow: a valid submit stages the data and opens a confirmation
//! prompt; confirming sends it. After a confirm the form always resets,
//! navigates to the system listing and closes the prompt, whether or not the
//! save succeeded. The outcome is returned and logged.

use crate::api::{Navigator, SystemApi};
use crate::config::PanelConfig;
use crate::domain::{FormMode, Identifier, System};
use crate::error::{ApiResult, FormError};
use crate::form::{FieldValue, FormEvent, FormState};
use crate::schema::{SystemField, SystemFormData, SystemFormValues, SystemSchema};

/// Write to perform once the user confirms
#[derive(Debug, Clone, PartialEq)]
pub enum SystemSubmission {
    Create(SystemFormData),
    Update(Identifier, SystemFormData),
}

impl SystemSubmission {
    pub async fn send(&self, api: &dyn SystemApi) -> ApiResult<System> {
        match self {
            SystemSubmission::Create(data) => api.save_system(data).await,
            SystemSubmission::Update(id, data) => api.update_system(*id, data).await,
        }
    }
}

/// Result of a confirmed submission; navigation happened either way
pub type SystemSaveOutcome = ApiResult<System>;

#[derive(Debug)]
pub struct SystemFormController {
    state: FormState<SystemSchema>,
    mode: FormMode,
    staged: Option<SystemFormData>,
    dialog_open: bool,
}

impl SystemFormController {
    /// A default record with an id puts the form in update mode
    pub fn new(existing: Option<&System>) -> Self {
        Self {
            state: FormState::new(SystemFormValues::from_record(existing)),
            mode: FormMode::for_record(existing),
            staged: None,
            dialog_open: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn state(&self) -> &FormState<SystemSchema> {
        &self.state
    }

    pub fn values(&self) -> &SystemFormValues {
        self.state.values()
    }

    pub fn error(&self, field: SystemField) -> Option<&str> {
        self.state.error(field)
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn staged(&self) -> Option<&SystemFormData> {
        self.staged.as_ref()
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit system"
        } else {
            "Register system"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() {
            "Update System"
        } else {
            "Register System"
        }
    }

    pub fn edit(&mut self, field: SystemField, value: FieldValue) -> Result<(), FormError> {
        self.state.apply(FormEvent::Edit { field, value }).map(|_| ())
    }

    pub fn reset(&mut self) {
        let _ = self.state.apply(FormEvent::Reset);
    }

    /// Validate and stage; opens the confirmation prompt when valid
    pub fn request_confirmation(&mut self) -> Result<(), FormError> {
        let data = self.state.validate()?;
        self.staged = Some(data);
        self.dialog_open = true;
        Ok(())
    }

    pub fn cancel_confirmation(&mut self) {
        self.dialog_open = false;
        self.staged = None;
    }

    /// Start sending the staged data
    pub fn begin_confirm(&mut self) -> Result<SystemSubmission, FormError> {
        let data = self.staged.clone().ok_or(FormError::NothingStaged)?;
        self.state.apply(FormEvent::Begin)?;
        Ok(match self.mode {
            FormMode::Edit(id) => SystemSubmission::Update(id, data),
            FormMode::Create => SystemSubmission::Create(data),
        })
    }

    /// Reset, navigate and close the prompt regardless of `result`
    pub fn finish_confirm(
        &mut self,
        result: ApiResult<System>,
        navigator: &dyn Navigator,
        config: &PanelConfig,
    ) -> SystemSaveOutcome {
        match &result {
            Ok(system) => log::info!("[SYSTEM_FORM] saved system {:?}", system.id),
            Err(e) => log::error!("[SYSTEM_FORM] save failed, leaving form anyway: {}", e),
        }
        let _ = self.state.apply(FormEvent::Reset);
        navigator.push(&config.system_listing_route);
        self.dialog_open = false;
        self.staged = None;
        let _ = self.state.apply(FormEvent::Settled);
        result
    }

    /// Full confirm: send staged data, then settle
    pub async fn confirm(
        &mut self,
        api: &dyn SystemApi,
        navigator: &dyn Navigator,
        config: &PanelConfig,
    ) -> Result<SystemSaveOutcome, FormError> {
        let submission = self.begin_confirm()?;
        let result = submission.send(api).await;
        Ok(self.finish_confirm(result, navigator, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::RecordingNavigator;
    use async_trait::async_trait;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Save(SystemFormData),
        Update(Identifier, SystemFormData),
    }

    #[derive(Default)]
    struct FakeSystemApi {
        calls: RefCell<Vec<Call>>,
        fail: bool,
    }

    impl FakeSystemApi {
        fn respond(&self, id: Identifier, data: &SystemFormData) -> ApiResult<System> {
            if self.fail {
                return Err(ApiError::Transport("connection reset".to_string()));
            }
            Ok(System {
                id: Some(id),
                name: data.name.clone(),
                description: data.description.clone(),
                status: data.status,
            })
        }
    }

    #[async_trait(?Send)]
    impl SystemApi for FakeSystemApi {
        async fn save_system(&self, data: &SystemFormData) -> ApiResult<System> {
            self.calls.borrow_mut().push(Call::Save(data.clone()));
            self.respond(50, data)
        }

        async fn update_system(&self, id: Identifier, data: &SystemFormData) -> ApiResult<System> {
            self.calls.borrow_mut().push(Call::Update(id, data.clone()));
            self.respond(id, data)
        }
    }

    fn existing_system() -> System {
        System {
            id: Some(11),
            name: "Fire pumps".to_string(),
            description: Some("Main hall".to_string()),
            status: true,
        }
    }

    #[test]
    fn test_short_name_never_opens_prompt() {
        let mut form = SystemFormController::new(None);
        form.edit(SystemField::Name, FieldValue::text("AC")).unwrap();

        assert_eq!(form.request_confirmation(), Err(FormError::Invalid { issues: 1 }));
        assert_eq!(
            form.error(SystemField::Name),
            Some("The name must be at least 3 characters long")
        );
        assert!(!form.is_dialog_open());
        assert_eq!(form.begin_confirm(), Err(FormError::NothingStaged));
    }

    #[tokio::test]
    async fn test_confirm_creates_then_resets_and_navigates() {
        let api = FakeSystemApi::default();
        let nav = RecordingNavigator::default();
        let mut form = SystemFormController::new(None);
        form.edit(SystemField::Name, FieldValue::text("Chillers")).unwrap();
        form.request_confirmation().unwrap();
        assert!(form.is_dialog_open());
        assert!(api.calls.borrow().is_empty());

        let outcome = form.confirm(&api, &nav, &PanelConfig::default()).await.unwrap();

        assert!(outcome.is_ok());
        assert!(matches!(api.calls.borrow()[0], Call::Save(_)));
        assert_eq!(nav.routes(), ["/admin/alerts"]);
        assert!(!form.is_dialog_open());
        assert!(!form.is_submitting());
        assert_eq!(form.values(), &SystemFormValues::default());
    }

    #[tokio::test]
    async fn test_confirm_navigates_even_when_save_fails() {
        let api = FakeSystemApi {
            fail: true,
            ..FakeSystemApi::default()
        };
        let nav = RecordingNavigator::default();
        let mut form = SystemFormController::new(Some(&existing_system()));
        form.edit(SystemField::Name, FieldValue::text("Fire pumps B")).unwrap();
        form.request_confirmation().unwrap();

        let outcome = form.confirm(&api, &nav, &PanelConfig::default()).await.unwrap();

        assert!(matches!(outcome, Err(ApiError::Transport(_))));
        assert_eq!(nav.routes(), ["/admin/alerts"]);
        assert!(!form.is_dialog_open());
        assert_eq!(form.values().name, "Fire pumps");
        assert!(!form.state().is_dirty());
    }

    #[tokio::test]
    async fn test_existing_record_takes_update_path() {
        let api = FakeSystemApi::default();
        let nav = RecordingNavigator::default();
        let mut form = SystemFormController::new(Some(&existing_system()));
        form.request_confirmation().unwrap();
        form.confirm(&api, &nav, &PanelConfig::default()).await.unwrap().unwrap();

        let calls = api.calls.borrow();
        match &calls[0] {
            Call::Update(id, data) => {
                assert_eq!(*id, 11);
                assert_eq!(data.description.as_deref(), Some("Main hall"));
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_closes_prompt_without_sending() {
        let mut form = SystemFormController::new(Some(&existing_system()));
        form.request_confirmation().unwrap();
        form.cancel_confirmation();
        assert!(!form.is_dialog_open());
        assert!(form.staged().is_none());
    }

    #[test]
    fn test_second_confirm_while_in_flight_is_busy() {
        let mut form = SystemFormController::new(Some(&existing_system()));
        form.request_confirmation().unwrap();
        assert!(matches!(form.begin_confirm(), Ok(SystemSubmission::Update(11, _))));
        assert_eq!(form.begin_confirm(), Err(FormError::Busy));
    }

    #[tokio::test]
    async fn test_status_round_trip() {
        let api = FakeSystemApi::default();
        let nav = RecordingNavigator::default();
        let mut form = SystemFormController::new(Some(&existing_system()));
        assert_eq!(form.values().status_str(), "true");
        form.edit(SystemField::Status, FieldValue::text("true")).unwrap();
        form.request_confirmation().unwrap();
        assert_eq!(form.staged().map(|data| data.status), Some(true));

        let saved = form.confirm(&api, &nav, &PanelConfig::default()).await.unwrap().unwrap();
        let redisplayed = SystemFormController::new(Some(&saved));
        assert!(redisplayed.values().status);
        assert_eq!(redisplayed.values().status_str(), "true");
    }

    #[test]
    fn test_reset_restores_record_values() {
        let mut form = SystemFormController::new(Some(&existing_system()));
        form.edit(SystemField::Description, FieldValue::text("")).unwrap();
        form.edit(SystemField::Status, FieldValue::Flag(false)).unwrap();
        form.reset();
        assert_eq!(form.values().description, "Main hall");
        assert!(form.values().status);
    }
}
