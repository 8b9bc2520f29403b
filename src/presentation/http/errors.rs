//! HTTP error handling and response conversion.
//!
//! Maps application and domain errors to HTTP status codes and the
//! `{status, message}` JSON body clients expect: `status` is `"fail"` for
//! client errors and `"error"` for server errors.

use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Request validation failed (400).
    BadRequest(String),

    /// Missing or invalid bearer token (401).
    Unauthorized,

    /// Authenticated but not allowed, e.g. not the resource owner (403).
    Forbidden(String),

    /// Unclassified internal error (500). The message is logged, never
    /// returned to the client.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Missing authentication"),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-safe message, without implementation details.
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Forbidden(msg) => msg.clone(),
            Self::Unauthorized => "Missing authentication".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::UNAUTHORIZED => {
                tracing::debug!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        let body = if status.is_server_error() {
            json!({ "status": "error", "message": message })
        } else {
            json!({ "status": "fail", "message": message })
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Forbidden(msg) => AppError::Forbidden(msg),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Infrastructure(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::PoolTimedOut => {
                tracing::warn!("Database connection pool exhausted, timing out");
                AppError::Internal("Connection pool exhausted".into())
            }
            _ => {
                tracing::error!(database_error = %err);
                AppError::Internal("Database error".into())
            }
        }
    }
}
