//! LLM provider API handlers

use crate::api::utils::parse_json;
use crate::error::AppError;
use crate::llm::{provider_statuses, ProviderKind, ProvidersResponse};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Body of `POST /api/llm/switch`
#[derive(Debug, Default, Deserialize)]
pub struct SwitchProviderRequest {
    /// Provider to switch to
    #[serde(default)]
    pub provider: Option<String>,
}

/// Response of `POST /api/llm/switch`
#[derive(Debug, Serialize)]
pub struct SwitchProviderResponse {
    /// Always true for successful responses
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Provider switched to
    pub provider: ProviderKind,
}

/// GET /api/llm/providers - Provider availability and the default provider
pub async fn list_providers(State(state): State<AppState>) -> Json<ProvidersResponse> {
    Json(provider_statuses(&state.config.providers))
}

/// POST /api/llm/switch - Acknowledge a provider switch
///
/// Nothing is persisted; the provider is only validated and echoed back.
pub async fn switch_provider(
    payload: Result<Json<SwitchProviderRequest>, JsonRejection>,
) -> Result<Json<SwitchProviderResponse>, AppError> {
    let request = parse_json(payload)?;
    let name = request
        .provider
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Provider is required".to_string()))?;
    let provider: ProviderKind = name.parse()?;

    info!(provider = %provider, "Provider switch requested");

    Ok(Json(SwitchProviderResponse {
        success: true,
        message: format!("Switched to {}", provider),
        provider,
    }))
}
