//! Unified error handling
//!
//! Application error type and the `{ "message": ... }` wire shape:
//! - [`AppError`] — application error enum
//! - [`ApiMessage`] — message body used for errors and confirmations
//! - [`AppJson`] — JSON extractor whose rejection answers 400 `{message}`
//!
//! # Status mapping
//!
//! | Variant | Status |
//! |---------|--------|
//! | Validation | 400 |
//! | NotFound | 404 |
//! | Database | 400 (persistence failures pass their message through) |
//! | Internal | 500 |

use axum::{
    Json,
    extract::FromRequest,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::db::repository::RepoError;

/// Wire shape shared by error responses and plain confirmations:
///
/// ```json
/// { "message": "Worker not found" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input failed schema coercion (bad date, non-numeric amount, malformed body)
    #[error("{0}")]
    Validation(String),

    /// Targeted record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure, message passed through to the caller
    #[error("{0}")]
    Database(String),

    /// Process-level fault; details stay in the log
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Store error");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiMessage::new(message))).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// JSON body extractor that reports deserialization failures as
/// 400 `{message}` instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
