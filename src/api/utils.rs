//! API utility functions
//!
//! Contains helpers used by API handlers for body extraction and
//! validation.

use crate::error::AppError;
use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;

/// Standard success envelope: `{"success": true, "data": ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Always true for successful responses
    pub success: bool,
    /// Payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in a success envelope
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Unwrap a JSON body, turning any rejection into a validation error
///
/// Malformed JSON, a wrong content type or a shape mismatch all become a
/// 400 instead of axum's default status for each case.
pub fn parse_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Validate a chat message
///
/// Only an empty message is rejected; whitespace and length are left to
/// the backend.
pub fn validate_message(message: &str) -> Result<(), AppError> {
    if message.is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }
    Ok(())
}
