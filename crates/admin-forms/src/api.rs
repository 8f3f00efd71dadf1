//! Collaborator Traits
//!
//! Abstract interfaces to the remote API and the router. The browser build
//! binds them to host commands; tests use in-memory fakes.
//!
//! Futures are not `Send`: the panel runs on a single browser thread.

use async_trait::async_trait;

use crate::domain::{Identifier, System, Task};
use crate::error::ApiResult;
use crate::schema::{SystemFormData, TaskFormData};

/// Reference list of systems for selection controls
#[async_trait(?Send)]
pub trait SystemsApi {
    async fn fetch_systems(&self) -> ApiResult<Vec<System>>;
}

/// Task writes
#[async_trait(?Send)]
pub trait TaskApi {
    /// Create when `id` is `None`, update otherwise
    async fn save_or_update_task(&self, data: &TaskFormData, id: Option<Identifier>) -> ApiResult<Task>;
}

/// System writes
#[async_trait(?Send)]
pub trait SystemApi {
    async fn save_system(&self, data: &SystemFormData) -> ApiResult<System>;

    async fn update_system(&self, id: Identifier, data: &SystemFormData) -> ApiResult<System>;
}

/// Imperative "go to route" side effect
pub trait Navigator {
    fn push(&self, route: &str);
}
