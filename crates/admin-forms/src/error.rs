//! Error types shared by forms and collaborators.

use thiserror::Error;

/// Result of a remote API call
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reported by a remote API collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with an error
    #[error("rejected by server: {0}")]
    Rejected(String),
    /// The response could not be decoded into the expected record
    #[error("invalid response: {0}")]
    Decode(String),
}

/// A raw input that cannot be stored in the targeted field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldCoercionError {
    pub field: String,
    pub message: String,
}

impl FieldCoercionError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Why a form event was not applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form has {issues} invalid field(s)")]
    Invalid { issues: usize },
    #[error("a submission is already in progress")]
    Busy,
    #[error("nothing staged for confirmation")]
    NothingStaged,
    #[error(transparent)]
    FieldType(#[from] FieldCoercionError),
}

/// Invalid panel configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("route `{name}` must start with '/': {value}")]
    Route { name: &'static str, value: String },
    #[error("invalid date format: {0}")]
    DateFormat(String),
}
