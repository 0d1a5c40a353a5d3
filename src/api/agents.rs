//! Agent management API handlers
//!
//! Contains HTTP request handlers for listing, adding, removing and
//! toggling agents in the registry.

use crate::api::utils::{parse_json, ApiResponse};
use crate::error::AppError;
use crate::state::{Agent, AgentId, AgentType, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Agents list payload
#[derive(Debug, Serialize)]
pub struct AgentsData {
    /// Matching agents
    pub agents: Vec<Agent>,
}

/// Single agent payload
#[derive(Debug, Serialize)]
pub struct AgentData {
    /// The agent
    pub agent: Agent,
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Always true for successful responses
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Query filters for `GET /api/agents`
#[derive(Debug, Default, Deserialize)]
pub struct AgentFilter {
    /// Only agents of this type
    #[serde(rename = "type")]
    pub agent_type: Option<String>,
    /// Only agents with this specialization tag
    pub specialization: Option<String>,
}

/// GET /api/agents - List agents, optionally filtered by type and specialization
pub async fn list_agents(
    State(state): State<AppState>,
    Query(filter): Query<AgentFilter>,
) -> Result<Json<ApiResponse<AgentsData>>, AppError> {
    let agent_type = filter
        .agent_type
        .as_deref()
        .map(str::parse::<AgentType>)
        .transpose()?;

    let registry = state.registry.read().await;
    let agents = match (agent_type, filter.specialization.as_deref()) {
        (Some(agent_type), Some(tag)) => {
            let tagged = registry.list_by_specialization(tag);
            registry
                .list_by_type(agent_type)
                .into_iter()
                .filter(|agent| tagged.iter().any(|t| t.id == agent.id))
                .collect()
        }
        (Some(agent_type), None) => registry.list_by_type(agent_type),
        (None, Some(tag)) => registry.list_by_specialization(tag),
        (None, None) => registry.list_all(),
    };

    Ok(ApiResponse::ok(AgentsData {
        agents: agents.into_iter().cloned().collect(),
    }))
}

/// GET /api/agents/active - List active agents
pub async fn list_active_agents(State(state): State<AppState>) -> Json<ApiResponse<AgentsData>> {
    let registry = state.registry.read().await;
    ApiResponse::ok(AgentsData {
        agents: registry.list_active().into_iter().cloned().collect(),
    })
}

/// GET /api/agents/:id - Get a specific agent
pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<AgentId>,
) -> Result<Json<ApiResponse<AgentData>>, AppError> {
    let registry = state.registry.read().await;
    let agent = registry
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::AgentNotFound(id.clone()))?;

    Ok(ApiResponse::ok(AgentData { agent }))
}

/// POST /api/agents - Register a new agent
pub async fn create_agent(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AgentData>>), AppError> {
    let agent = Agent::from_value(parse_json(payload)?)?;

    let mut registry = state.registry.write().await;
    if !registry.add(agent.clone()) {
        return Err(AppError::AgentExists(agent.id));
    }
    info!(agent_id = %agent.id, agent_type = %agent.agent_type, "Agent registered");

    Ok((StatusCode::CREATED, ApiResponse::ok(AgentData { agent })))
}

/// DELETE /api/agents/:id - Remove an agent
pub async fn delete_agent(
    State(state): State<AppState>,
    Path(id): Path<AgentId>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut registry = state.registry.write().await;
    if !registry.remove(&id) {
        return Err(AppError::AgentNotFound(id));
    }
    info!(agent_id = %id, "Agent removed");

    Ok(Json(MessageResponse {
        success: true,
        message: format!("Agent {} removed", id),
    }))
}

/// POST /api/agents/:id/activate - Activate an agent
pub async fn activate_agent(
    State(state): State<AppState>,
    Path(id): Path<AgentId>,
) -> Result<Json<ApiResponse<AgentData>>, AppError> {
    set_active(&state, id, true).await
}

/// POST /api/agents/:id/deactivate - Deactivate an agent
pub async fn deactivate_agent(
    State(state): State<AppState>,
    Path(id): Path<AgentId>,
) -> Result<Json<ApiResponse<AgentData>>, AppError> {
    set_active(&state, id, false).await
}

async fn set_active(
    state: &AppState,
    id: AgentId,
    active: bool,
) -> Result<Json<ApiResponse<AgentData>>, AppError> {
    let mut registry = state.registry.write().await;
    let changed = if active {
        registry.activate(&id)
    } else {
        registry.deactivate(&id)
    };
    if !changed {
        return Err(AppError::AgentNotFound(id));
    }

    let agent = registry
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::AgentNotFound(id.clone()))?;
    info!(agent_id = %id, active, "Agent activity updated");

    Ok(ApiResponse::ok(AgentData { agent }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn create_test_state() -> AppState {
        AppState::new(Config::default())
    }

    #[tokio::test]
    async fn test_list_agents_returns_builtins() {
        let state = create_test_state();
        let response = list_agents(State(state), Query(AgentFilter::default()))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.data.agents.len(), 6);
    }

    #[tokio::test]
    async fn test_list_agents_filters_by_type_and_tag() {
        let state = create_test_state();
        let filter = AgentFilter {
            agent_type: Some("offers".to_string()),
            specialization: Some("discounts".to_string()),
        };
        let response = list_agents(State(state), Query(filter)).await.unwrap();
        assert_eq!(response.data.agents.len(), 1);
        assert_eq!(response.data.agents[0].id, "offers-manager");
    }

    #[tokio::test]
    async fn test_list_agents_filters_intersect() {
        let state = create_test_state();
        let filter = AgentFilter {
            agent_type: Some("booking".to_string()),
            specialization: Some("deals".to_string()),
        };
        let response = list_agents(State(state), Query(filter)).await.unwrap();
        assert!(response.data.agents.is_empty());
    }

    #[tokio::test]
    async fn test_list_agents_rejects_unknown_type() {
        let state = create_test_state();
        let filter = AgentFilter {
            agent_type: Some("wizard".to_string()),
            specialization: None,
        };
        let result = list_agents(State(state), Query(filter)).await;
        assert!(matches!(result, Err(AppError::InvalidAgent(_))));
    }

    #[tokio::test]
    async fn test_get_agent_not_found() {
        let state = create_test_state();
        let result = get_agent(State(state), Path("nonexistent".to_string())).await;
        match result {
            Err(AppError::AgentNotFound(id)) => assert_eq!(id, "nonexistent"),
            other => panic!("Expected AgentNotFound error, got: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_deactivate_then_list_active() {
        let state = create_test_state();
        let response = deactivate_agent(State(state.clone()), Path("orchestrator".to_string()))
            .await
            .unwrap();
        assert!(!response.data.agent.active);

        let active = list_active_agents(State(state)).await;
        assert_eq!(active.data.agents.len(), 5);
        assert!(active.data.agents.iter().all(|a| a.id != "orchestrator"));
    }

    #[tokio::test]
    async fn test_delete_unknown_agent() {
        let state = create_test_state();
        let result = delete_agent(State(state), Path("ghost".to_string())).await;
        assert!(matches!(result, Err(AppError::AgentNotFound(_))));
    }
}
