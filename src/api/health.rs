//! Health check handler

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "Agentic Travel API";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Time the check was answered
    pub timestamp: DateTime<Utc>,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
