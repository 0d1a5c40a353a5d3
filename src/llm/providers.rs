//! Provider availability
//!
//! Computes per-provider status from configured API keys and picks the
//! default provider.

use crate::config::ProvidersConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Provider reported as default when none has an API key
pub const FALLBACK_PROVIDER: ProviderKind = ProviderKind::OpenAi;

/// Errors related to provider names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Name does not match any known provider
    #[error("Unknown provider: {0}")]
    Unknown(String),
}

/// LLM vendor enumeration
///
/// Declaration order is the preference order used to pick the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI
    OpenAi,
    /// Anthropic
    Anthropic,
    /// Google
    Google,
    /// Cohere
    Cohere,
}

impl ProviderKind {
    /// All providers, in preference order
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::Google,
        ProviderKind::Cohere,
    ];

    /// Key used in API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Google => "google",
            ProviderKind::Cohere => "cohere",
        }
    }

    /// Human-readable vendor name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::Google => "Google",
            ProviderKind::Cohere => "Cohere",
        }
    }

    /// Environment variable holding the vendor's API key
    pub fn api_key_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::Google => "GOOGLE_API_KEY",
            ProviderKind::Cohere => "COHERE_API_KEY",
        }
    }

    /// Models advertised for the vendor
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            ProviderKind::OpenAi => &["gpt-4", "gpt-3.5-turbo"],
            ProviderKind::Anthropic => &["claude-3-opus", "claude-3-sonnet"],
            ProviderKind::Google => &["gemini-pro", "gemini-pro-vision"],
            ProviderKind::Cohere => &["command", "command-light"],
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProviderError::Unknown(s.to_string()))
    }
}

/// Status of a single provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderStatus {
    /// Vendor display name
    pub name: String,
    /// Whether an API key is configured
    pub available: bool,
    /// Advertised models
    pub models: Vec<String>,
    /// "Available" or "No API Key"
    pub status: String,
}

impl ProviderStatus {
    fn for_provider(provider: ProviderKind, available: bool) -> Self {
        Self {
            name: provider.display_name().to_string(),
            available,
            models: provider.models().iter().map(|m| m.to_string()).collect(),
            status: if available { "Available" } else { "No API Key" }.to_string(),
        }
    }
}

/// Response body for the provider listing
#[derive(Debug, Clone, Serialize)]
pub struct ProvidersResponse {
    /// Status keyed by provider
    pub providers: BTreeMap<ProviderKind, ProviderStatus>,
    /// First available provider, or the fallback
    pub default: ProviderKind,
}

/// Compute provider statuses and the default provider
pub fn provider_statuses(config: &ProvidersConfig) -> ProvidersResponse {
    let providers: BTreeMap<ProviderKind, ProviderStatus> = ProviderKind::ALL
        .into_iter()
        .map(|p| (p, ProviderStatus::for_provider(p, config.has_api_key(p))))
        .collect();

    let default = providers
        .iter()
        .find(|(_, status)| status.available)
        .map(|(provider, _)| *provider)
        .unwrap_or(FALLBACK_PROVIDER);

    ProvidersResponse { providers, default }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_falls_back_to_openai() {
        let response = provider_statuses(&ProvidersConfig::default());
        assert_eq!(response.default, ProviderKind::OpenAi);
        assert_eq!(response.providers.len(), 4);
        for status in response.providers.values() {
            assert!(!status.available);
            assert_eq!(status.status, "No API Key");
        }
    }

    #[test]
    fn test_default_is_first_available_in_order() {
        let config = ProvidersConfig::with_keys([ProviderKind::Cohere, ProviderKind::Google]);
        let response = provider_statuses(&config);
        assert_eq!(response.default, ProviderKind::Google);
        assert_eq!(response.providers[&ProviderKind::Google].status, "Available");
        assert!(!response.providers[&ProviderKind::Anthropic].available);
    }

    #[test]
    fn test_serialized_shape() {
        let config = ProvidersConfig::with_keys([ProviderKind::Anthropic]);
        let value = serde_json::to_value(provider_statuses(&config)).unwrap();
        assert_eq!(value["default"], "anthropic");
        assert_eq!(value["providers"]["openai"]["name"], "OpenAI");
        assert_eq!(value["providers"]["anthropic"]["available"], true);
        assert_eq!(
            value["providers"]["cohere"]["models"],
            serde_json::json!(["command", "command-light"])
        );
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("OpenAI".parse::<ProviderKind>(), Ok(ProviderKind::OpenAi));
        assert_eq!("cohere".parse::<ProviderKind>(), Ok(ProviderKind::Cohere));
        assert!("mistral".parse::<ProviderKind>().is_err());
    }
}
