use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use roster_store::StoreError;
use serde_json::json;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{status, message}` and
/// `{status, errors}` JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from the in-memory table.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A payload that failed field validation.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// A not-found condition with a bespoke message (empty listing page).
    #[error("{0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    json!({ "status": 404, "message": core.to_string() }),
                ),
                CoreError::Conflict { .. } => (
                    StatusCode::CONFLICT,
                    json!({ "status": 409, "message": core.to_string() }),
                ),
                CoreError::MalformedDate => (
                    StatusCode::BAD_REQUEST,
                    json!({ "status": 400, "message": core.to_string() }),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "status": 500, "message": format!("Internal server error: {msg}") }),
                    )
                }
            },

            // --- Validation failures ---
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "status": 400, "errors": field_messages(errors) }),
            ),

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "status": 500, "message": format!("Internal server error: {err}") }),
                )
            }

            // --- HTTP-specific errors ---
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                json!({ "status": 404, "message": msg }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "status": 500, "message": format!("Internal server error: {msg}") }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten [`ValidationErrors`] into the wire shape: field name -> ordered
/// list of human-readable messages.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, violations)| {
            let messages = violations
                .iter()
                .map(|v| {
                    v.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| v.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
