//! LLM provider module
//!
//! Reports which LLM vendors could be used, based on configured API keys.
//! No provider is ever called.

pub mod providers;

pub use providers::{
    provider_statuses, ProviderError, ProviderKind, ProviderStatus, ProvidersResponse,
    FALLBACK_PROVIDER,
};
