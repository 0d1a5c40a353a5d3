// State management module
// Handles the agent registry and the shared application state

pub mod agent;
pub mod app_state;
pub mod registry;

pub use agent::{Agent, AgentDescriptor, AgentError, AgentId, AgentType};
pub use app_state::AppState;
pub use registry::AgentRegistry;
