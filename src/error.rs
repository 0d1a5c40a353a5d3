//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use crate::llm::ProviderError;
use crate::state::AgentError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client input failed validation
    #[error("{0}")]
    Validation(String),

    /// Agent descriptor or agent type was rejected
    #[error("Invalid agent: {0}")]
    InvalidAgent(#[from] AgentError),

    /// Provider name was rejected
    #[error("{0}")]
    InvalidProvider(#[from] ProviderError),

    /// Agent with the given ID was not found
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    /// Agent with the given ID is already registered
    #[error("Agent already exists: {0}")]
    AgentExists(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidAgent(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidProvider(_) => StatusCode::BAD_REQUEST,
            AppError::AgentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::AgentExists(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            AppError::Internal(e) => {
                // Details stay in the server log
                error!(error = %e, "Unhandled error while processing request");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("Message is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(AgentError::UnknownType("x".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AgentNotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AgentExists("x".into()).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_internal_error_is_not_leaked() {
        let response = AppError::from(anyhow!("database password is hunter2")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
