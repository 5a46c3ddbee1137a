//! Client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "MART_BASE_URL";
/// Environment variable overriding [`ClientConfig::token`].
pub const TOKEN_ENV: &str = "MART_TOKEN";

/// Configuration for talking to the commerce backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL prepended to every relative request path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Value of the `source-client` header the backend uses to pick a channel.
    #[serde(default = "default_source_client")]
    pub source_client: String,

    /// Page size used by feeds.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Login token sent verbatim as the `Authorization` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    "https://pcapi-xiaotuxian-front-devtest.itheima.net".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_source_client() -> String {
    "miniapp".to_string()
}

fn default_page_size() -> u32 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            source_client: default_source_client(),
            page_size: default_page_size(),
            token: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the login token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the feed page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Apply `MART_BASE_URL` and `MART_TOKEN` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(TOKEN_ENV).ok(),
        )
    }

    fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(base_url) = base_url.filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        if let Some(token) = token.filter(|v| !v.is_empty()) {
            self.token = Some(token);
        }
        self
    }

    /// Resolve a request path against the base URL.
    ///
    /// Absolute URLs pass through untouched.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        } else {
            format!("{}/{}", self.base_url.trim_end_matches('/'), path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.source_client, "miniapp");
        assert_eq!(config.page_size, 10);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://localhost:8080")
            .with_timeout_ms(500)
            .with_token("Bearer abc")
            .with_page_size(20);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_millis(500));
        assert_eq!(config.token.as_deref(), Some("Bearer abc"));
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://api.test"}"#).unwrap();
        assert_eq!(config.base_url, "http://api.test");
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_overrides_ignore_empty_values() {
        let config = ClientConfig::new("http://a").with_overrides(Some(String::new()), None);
        assert_eq!(config.base_url, "http://a");

        let config =
            ClientConfig::new("http://a").with_overrides(Some("http://b".into()), Some("t".into()));
        assert_eq!(config.base_url, "http://b");
        assert_eq!(config.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_resolve_url() {
        let config = ClientConfig::new("http://api.test/");
        assert_eq!(config.resolve_url("/home/banner"), "http://api.test/home/banner");
        assert_eq!(config.resolve_url("hot/preference"), "http://api.test/hot/preference");
        assert_eq!(
            config.resolve_url("https://other.test/x"),
            "https://other.test/x"
        );
    }
}
