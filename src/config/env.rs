// src/config/env.rs
// Environment-based configuration - all env vars in one place

use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8787;

/// Upstream chat-completion gateway settings
#[derive(Clone, Default)]
pub struct GatewayConfig {
    /// Bearer token for the gateway (PROMPTFORGE_API_KEY). Never leaves the server.
    pub api_key: Option<String>,
    /// Chat-completions URL (PROMPTFORGE_API_URL)
    pub api_url: String,
    /// Model name sent with every request (PROMPTFORGE_MODEL)
    pub model: String,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GatewayConfig {
    pub fn new(api_key: Option<String>, api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            api_url: api_url.into(),
            model: model.into(),
        }
    }

    /// Load from process environment (call after `dotenvy::dotenv()`)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let config = Self {
            api_key: read("PROMPTFORGE_API_KEY"),
            api_url: read("PROMPTFORGE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: read("PROMPTFORGE_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        };
        config.log_status();
        config
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(
        mut self,
        api_key: Option<String>,
        api_url: Option<String>,
        model: Option<String>,
    ) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(model) = model {
            self.model = model;
        }
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn log_status(&self) {
        if self.has_api_key() {
            debug!(api_url = %self.api_url, model = %self.model, "Gateway configured");
        } else {
            warn!("PROMPTFORGE_API_KEY not set - generation requests will fail");
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GatewayConfig::from_lookup(lookup_from(&[]));
        assert!(!config.has_api_key());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("PROMPTFORGE_API_KEY", "secret"),
            ("PROMPTFORGE_API_URL", "http://localhost:9000/v1/chat/completions"),
            ("PROMPTFORGE_MODEL", "test-model"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.api_url, "http://localhost:9000/v1/chat/completions");
        assert_eq!(config.model, "test-model");
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = GatewayConfig::from_lookup(lookup_from(&[("PROMPTFORGE_API_KEY", "   ")]));
        assert!(!config.has_api_key());
        assert!(!GatewayConfig::new(Some(String::new()), DEFAULT_API_URL, DEFAULT_MODEL).has_api_key());
    }

    #[test]
    fn test_overrides_win_over_environment() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("PROMPTFORGE_API_KEY", "env-key"),
            ("PROMPTFORGE_MODEL", "env-model"),
        ]))
        .with_overrides(Some("cli-key".into()), None, Some("cli-model".into()));
        assert_eq!(config.api_key.as_deref(), Some("cli-key"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "cli-model");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayConfig::new(Some("sk-very-secret".into()), DEFAULT_API_URL, DEFAULT_MODEL);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(ServerConfig::default().bind_address(), "0.0.0.0:8787");
    }
}
