//! HTTP error handling and response types.

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::services::ParseError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub detail: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Input could not be turned into numbers
    Parse(ParseError),
    /// Body is not JSON, lacks `numbers`, or has the wrong shape
    InvalidBody(JsonRejection),
    /// Unexpected failure (a defect, never a client error)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Parse(e) => (StatusCode::BAD_REQUEST, ApiError::new(e.code(), e.to_string())),
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                ApiError::new("INVALID_BODY", rejection.body_text()),
            ),
            AppError::Internal(msg) => {
                error!(error = %msg, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", "Internal server error"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Parse(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Turn a handler panic into a structured 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(msg).into_response()
}
