//! System Commands
//!
//! Frontend bindings for system-related remote commands.

use serde::{Deserialize, Serialize};

use admin_forms::schema::SystemFormData;
use admin_forms::{ApiResult, Identifier, System};

use super::{call, decode, to_args};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SaveSystemArgs<'a> {
    data: &'a SystemFormData,
}

#[derive(Serialize)]
struct UpdateSystemArgs<'a> {
    id: Identifier,
    data: &'a SystemFormData,
}

#[derive(Deserialize)]
struct SystemsResponse {
    #[serde(default)]
    systems: Vec<System>,
}

// ========================
// Commands
// ========================

pub async fn fetch_systems() -> ApiResult<Vec<System>> {
    let result = call("fetch_systems", wasm_bindgen::JsValue::NULL).await?;
    let response: SystemsResponse = decode(result)?;
    Ok(response.systems)
}

pub async fn save_system(data: &SystemFormData) -> ApiResult<System> {
    let result = call("save_system", to_args(&SaveSystemArgs { data })?).await?;
    decode(result)
}

pub async fn update_system(id: Identifier, data: &SystemFormData) -> ApiResult<System> {
    let result = call("update_system", to_args(&UpdateSystemArgs { id, data })?).await?;
    decode(result)
}
