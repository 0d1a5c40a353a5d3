//! Chat API handler
//!
//! Validates the user message, asks the configured `LlmBackend` for a
//! reply and returns it together with the currently active agents.

use crate::api::utils::{parse_json, validate_message};
use crate::chat::{ChatContext, ChatRequest, ChatResponse, Message};
use crate::error::AppError;
use crate::state::{Agent, AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

/// Agent credited with chat replies
pub const REPLYING_AGENT_ID: &str = "orchestrator";

/// POST /api/chat - Reply to a user message
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request = parse_json(payload)?;
    validate_message(&request.message)?;

    let active_agents: Vec<Agent> = {
        let registry = state.registry.read().await;
        registry.list_active().into_iter().cloned().collect()
    };

    let context = ChatContext {
        user_id: request.user_id().to_string(),
        session_id: request.session_id().to_string(),
        active_agents: active_agents.iter().map(|a| a.id.clone()).collect(),
    };

    info!(
        user_id = %context.user_id,
        session_id = %context.session_id,
        message_len = request.message.len(),
        "Chat request received"
    );

    let content = state
        .llm
        .generate_response(&request.message, &context)
        .await?;

    Ok(Json(ChatResponse {
        message: Message::from_agent(REPLYING_AGENT_ID, content),
        active_agents,
        session_id: context.session_id,
    }))
}
