//! Chat reply generation
//!
//! `LlmBackend` is the seam where a real model integration plugs in. The
//! only implementation today is `MockLlm`, which echoes the user message.

use crate::llm::ProviderKind;
use async_trait::async_trait;

/// Request context handed to a backend alongside the message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatContext {
    /// Caller's user id
    pub user_id: String,
    /// Caller's session id
    pub session_id: String,
    /// Ids of agents active for this request
    pub active_agents: Vec<String>,
}

/// Something that can write a reply to a user message
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Produce reply content for `message`
    async fn generate_response(&self, message: &str, context: &ChatContext)
        -> anyhow::Result<String>;
}

/// Backend that returns a canned reply
#[derive(Debug, Clone, Copy, Default)]
pub struct MockLlm;

#[async_trait]
impl LlmBackend for MockLlm {
    async fn generate_response(
        &self,
        message: &str,
        _context: &ChatContext,
    ) -> anyhow::Result<String> {
        let key_list: String = ProviderKind::ALL
            .iter()
            .map(|p| format!("   - {}\n", p.api_key_var()))
            .collect();

        Ok(format!(
            "🤖 **AI Response**\n\n\
             I received your message: '{message}'\n\n\
             This is a mock response. To integrate with real LLMs:\n\n\
             1. **Set up API keys** in `.env`:\n\
             {key_list}\n\
             2. **Implement an `LlmBackend`** and pass it to `AppState::with_backend`\n\n\
             Your message: {message}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_echoes_message() {
        let reply = MockLlm
            .generate_response("Trip to Lisbon", &ChatContext::default())
            .await
            .unwrap();
        assert!(reply.contains("I received your message: 'Trip to Lisbon'"));
        assert!(reply.ends_with("Your message: Trip to Lisbon"));
    }

    #[tokio::test]
    async fn test_mock_lists_api_key_variables() {
        let reply = MockLlm
            .generate_response("hi", &ChatContext::default())
            .await
            .unwrap();
        for provider in ProviderKind::ALL {
            assert!(reply.contains(provider.api_key_var()));
        }
    }
}
