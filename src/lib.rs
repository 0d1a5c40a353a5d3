//! Travel Assistant API Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
/// Application state management
///
/// Handles the agent registry and the handles shared across requests.
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;
