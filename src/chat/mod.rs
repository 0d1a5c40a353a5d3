//! Chat module
//!
//! Message shapes for the chat endpoint and the backend that writes replies.

pub mod models;
pub mod responder;

pub use models::{ChatRequest, ChatResponse, Message, Sender};
pub use responder::{ChatContext, LlmBackend, MockLlm};
