//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::llm::ProviderKind;
use std::env;
use tokio::net::TcpListener;

/// Default port when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 8000;
/// Default bind address when `HOST` is unset
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// LLM provider configuration
    pub providers: ProvidersConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl ServerConfig {
    /// Bind a listener on the configured host and port
    ///
    /// The host may be a hostname (`localhost`), an IPv4 or an IPv6 literal.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }
}

/// Provider configuration
///
/// Only records which providers have an API key set. Key values are never
/// kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidersConfig {
    configured: Vec<ProviderKind>,
}

impl ProvidersConfig {
    /// Build from an explicit list of providers that have keys
    pub fn with_keys(providers: impl IntoIterator<Item = ProviderKind>) -> Self {
        let mut configured: Vec<ProviderKind> = providers.into_iter().collect();
        configured.sort();
        configured.dedup();
        Self { configured }
    }

    /// Whether an API key is present for the provider
    pub fn has_api_key(&self, provider: ProviderKind) -> bool {
        self.configured.contains(&provider)
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let providers = ProviderKind::ALL.into_iter().filter(|provider| {
            lookup(provider.api_key_var()).is_some_and(|value| !value.is_empty())
        });

        Self {
            server: ServerConfig {
                port: lookup("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            },
            providers: ProvidersConfig::with_keys(providers),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server_addr(), "127.0.0.1:8000");
        for provider in ProviderKind::ALL {
            assert!(!config.providers.has_api_key(provider));
        }
    }

    #[test]
    fn test_port_and_host_override() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "9100"), ("HOST", "0.0.0.0")]));
        assert_eq!(config.server_addr(), "0.0.0.0:9100");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_provider_keys_detected() {
        let config = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-ant"),
            ("COHERE_API_KEY", ""),
        ]));
        assert!(config.providers.has_api_key(ProviderKind::Anthropic));
        assert!(!config.providers.has_api_key(ProviderKind::Cohere));
        assert!(!config.providers.has_api_key(ProviderKind::OpenAi));
    }

    #[tokio::test]
    async fn test_bind_resolves_hostname() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "localhost"), ("PORT", "0")]));
        let listener = config.server.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_accepts_ipv4_literal() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "0")]));
        let listener = config.server.bind().await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        env::set_var("GOOGLE_API_KEY", "test-key");
        let config = Config::from_env();
        env::remove_var("GOOGLE_API_KEY");
        assert!(config.providers.has_api_key(ProviderKind::Google));
    }
}
