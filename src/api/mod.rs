//! API module
//!
//! Contains HTTP request handlers and the router that wires them together.

pub mod agents;
pub mod chat;
pub mod health;
pub mod llm;
pub mod utils;

use crate::state::AppState;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Build the application router over the given state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Chat
        .route("/api/chat", post(chat::chat))
        // Agent registry
        .route(
            "/api/agents",
            get(agents::list_agents).post(agents::create_agent),
        )
        .route("/api/agents/active", get(agents::list_active_agents))
        .route(
            "/api/agents/:id",
            get(agents::get_agent).delete(agents::delete_agent),
        )
        .route("/api/agents/:id/activate", post(agents::activate_agent))
        .route("/api/agents/:id/deactivate", post(agents::deactivate_agent))
        // LLM providers
        .route("/api/llm/providers", get(llm::list_providers))
        .route("/api/llm/switch", post(llm::switch_provider))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
