//! Task Commands
//!
//! Frontend bindings for task-related remote commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use admin_forms::schema::TaskFormData;
use admin_forms::{ApiError, ApiResult, Identifier, Task};

use super::{call, decode, to_args};

#[derive(Serialize)]
struct SaveOrUpdateTaskArgs<'a> {
    data: &'a TaskFormData,
    id: Option<Identifier>,
}

/// `{ task?, error? }` as answered by the server
#[derive(Deserialize)]
struct TaskResponse {
    task: Option<Task>,
    error: Option<Value>,
}

impl TaskResponse {
    fn into_result(self) -> ApiResult<Task> {
        match (self.task, self.error) {
            (_, Some(error)) => Err(ApiError::Rejected(error_message(&error))),
            (Some(task), None) => Ok(task),
            (None, None) => Err(ApiError::Decode("response carried neither task nor error".to_string())),
        }
    }
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        other => other
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| other.to_string()),
    }
}

pub async fn save_or_update_task(data: &TaskFormData, id: Option<Identifier>) -> ApiResult<Task> {
    let result = call("save_or_update_task", to_args(&SaveOrUpdateTaskArgs { data, id })?).await?;
    let response: TaskResponse = decode(result)?;
    response.into_result()
}
