//! Chat data models
//!
//! Defines the request, response and message shapes of the chat endpoint.

use crate::state::Agent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Session id used when the client does not send one
pub const DEFAULT_SESSION_ID: &str = "default";
/// User id used when the client does not send one
pub const ANONYMOUS_USER_ID: &str = "anonymous";

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message from the user
    User,
    /// Message from an agent
    Agent,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Message identifier
    pub id: String,
    /// Message text
    pub content: String,
    /// Author of the message
    pub sender: Sender,
    /// Agent that produced the message, for agent messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
    /// Free-form extra data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl Message {
    /// Create an agent message stamped with the current time
    pub fn from_agent(agent_id: impl Into<String>, content: String) -> Self {
        Self {
            id: format!("agent_{}", Uuid::new_v4()),
            content,
            sender: Sender::Agent,
            agent_id: Some(agent_id.into()),
            timestamp: Utc::now(),
            metadata: None,
        }
    }
}

/// Body of `POST /api/chat`
///
/// A missing `message` deserializes as empty so it can be rejected with a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// User message
    #[serde(default)]
    pub message: String,
    /// Optional user identifier
    #[serde(default)]
    pub user_id: Option<String>,
    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// User id, or the anonymous placeholder
    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(ANONYMOUS_USER_ID)
    }

    /// Session id, or the default session
    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or(DEFAULT_SESSION_ID)
    }
}

/// Response of `POST /api/chat`
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// The reply
    pub message: Message,
    /// Agents active when the reply was produced
    pub active_agents: Vec<Agent>,
    /// Session the reply belongs to
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(request.user_id(), "anonymous");
        assert_eq!(request.session_id(), "default");

        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.message.is_empty());
    }

    #[test]
    fn test_agent_message_shape() {
        let message = Message::from_agent("orchestrator", "hello".to_string());
        assert!(message.id.starts_with("agent_"));

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["sender"], "agent");
        assert_eq!(value["agent_id"], "orchestrator");
        assert!(value.get("metadata").is_none());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_agent_message_ids_are_unique() {
        let first = Message::from_agent("orchestrator", "a".to_string());
        let second = Message::from_agent("orchestrator", "b".to_string());
        assert_ne!(first.id, second.id);
    }
}
