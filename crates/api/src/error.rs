use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newsroom_core::error::CoreError;
use serde_json::json;

use crate::coordinator::NewsError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and carries an operation-specific
/// message for store failures. Implements [`IntoResponse`] to produce
/// consistent `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `newsroom_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure while performing a named operation.
    ///
    /// Only `message` reaches the client; `source` is logged.
    #[error("{message}: {source}")]
    Operation {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Convert a coordinator error, labelling store failures with `message`.
    pub fn from_news(err: NewsError, message: &'static str) -> Self {
        match err {
            NewsError::Core(core) => AppError::Core(core),
            NewsError::Store(source) => AppError::Operation { message, source },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::MalformedId { entity, raw } => {
                    tracing::debug!(%entity, raw = %raw, "Unparsable id in path");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Operation { message, source } => {
                tracing::error!(error = %source, operation = message, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    message.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
