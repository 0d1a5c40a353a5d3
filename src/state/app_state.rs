// Application state
// Explicitly constructed handles shared by all request handlers

use crate::chat::{LlmBackend, MockLlm};
use crate::config::Config;
use crate::state::registry::AgentRegistry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// Cloned into every handler by axum. The registry sits behind a single
/// lock so the agent map and its active index always change together.
#[derive(Clone)]
pub struct AppState {
    /// Agent registry
    pub registry: Arc<RwLock<AgentRegistry>>,
    /// Application configuration
    pub config: Arc<Config>,
    /// Backend producing chat replies
    pub llm: Arc<dyn LlmBackend>,
}

impl AppState {
    /// Create state with a fresh registry and the mock chat backend
    pub fn new(config: Config) -> Self {
        Self::with_backend(config, Arc::new(MockLlm))
    }

    /// Create state with a fresh registry and a custom chat backend
    pub fn with_backend(config: Config, llm: Arc<dyn LlmBackend>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(AgentRegistry::new())),
            config: Arc::new(config),
            llm,
        }
    }
}
