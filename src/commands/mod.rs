//! Host Command Wrappers
//!
//! Frontend bindings to the remote API commands, organized by domain.

mod system;
mod task;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use admin_forms::schema::{SystemFormData, TaskFormData};
use admin_forms::{ApiError, ApiResult, Identifier, System, SystemApi, SystemsApi, Task, TaskApi};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use system::*;
pub use task::*;

/// Run a command; a rejected promise becomes [`ApiError::Rejected`]
async fn call(cmd: &str, args: JsValue) -> ApiResult<JsValue> {
    invoke(cmd, args).await.map_err(|e| {
        let message = e.as_string().unwrap_or_else(|| format!("{:?}", e));
        log::debug!("[COMMANDS] {} rejected: {}", cmd, message);
        ApiError::Rejected(message)
    })
}

fn to_args<T: Serialize>(args: &T) -> ApiResult<JsValue> {
    serde_wasm_bindgen::to_value(args).map_err(|e| ApiError::Transport(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: JsValue) -> ApiResult<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Remote API backed by the host commands
#[derive(Debug, Clone, Copy, Default)]
pub struct HostApi;

#[async_trait(?Send)]
impl SystemsApi for HostApi {
    async fn fetch_systems(&self) -> ApiResult<Vec<System>> {
        fetch_systems().await
    }
}

#[async_trait(?Send)]
impl TaskApi for HostApi {
    async fn save_or_update_task(&self, data: &TaskFormData, id: Option<Identifier>) -> ApiResult<Task> {
        save_or_update_task(data, id).await
    }
}

#[async_trait(?Send)]
impl SystemApi for HostApi {
    async fn save_system(&self, data: &SystemFormData) -> ApiResult<System> {
        save_system(data).await
    }

    async fn update_system(&self, id: Identifier, data: &SystemFormData) -> ApiResult<System> {
        update_system(id, data).await
    }
}
