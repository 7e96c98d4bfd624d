use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    /// The request body was not usable JSON.
    BadRequest(String),
    Unauthorized,
    /// The backend failed to open at startup.
    NotConfigured,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(e) => write!(f, "Bad request: {}", e),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::NotConfigured => write!(f, "Database is not configured"),
        }
    }
}

fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                format!(
                    "{}: {}",
                    field,
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                )
            })
        })
        .collect();
    messages.sort();
    messages
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            Self::Storage(e) if e.is_validation() => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "All fields are required",
                    "details": [e.to_string()]
                }),
            ),
            Self::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": e.to_string()
                    }),
                )
            }
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "All fields are required",
                    "details": field_messages(errors)
                }),
            ),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": message
                }),
            ),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": "Invalid password"
                }),
            ),
            Self::NotConfigured => {
                tracing::error!("Request received but no database backend is available");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Database is not configured"
                    }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
