//! CLI configuration.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use mart_data::ClientConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Backend connection settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Feed defaults.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Environment-specific overrides.
    #[serde(default)]
    pub environments: HashMap<String, EnvironmentConfig>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; `path` picks the format.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Get environment-specific config.
    pub fn for_environment(&self, env: &str) -> Result<CliConfig> {
        let mut config = self.clone();

        let Some(env_config) = self.environments.get(env) else {
            bail!("Unknown environment '{}'", env);
        };
        if let Some(ref base_url) = env_config.base_url {
            config.client.base_url = base_url.clone();
        }
        if let Some(ref token) = env_config.token {
            config.client.token = Some(token.clone());
        }

        Ok(config)
    }

    /// Check values the backend would reject.
    pub fn validate(&self) -> Result<()> {
        if !self.client.base_url.starts_with("http://")
            && !self.client.base_url.starts_with("https://")
        {
            bail!("client.base_url must be an http(s) URL: {}", self.client.base_url);
        }
        if self.client.page_size == 0 {
            bail!("client.page_size must be at least 1");
        }
        if self.client.timeout_ms == 0 {
            bail!("client.timeout_ms must be at least 1");
        }
        if self.feed.pages == 0 {
            bail!("feed.pages must be at least 1");
        }
        Ok(())
    }
}

/// Feed defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Pages `mart feed` loads when `--pages` is not given.
    #[serde(default = "default_pages")]
    pub pages: u32,
}

fn default_pages() -> u32 {
    1
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
        }
    }
}

/// Environment-specific configuration overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub token: Option<String>,
}

/// Generate a default mart.toml config file.
pub fn generate_default_config() -> String {
    let client = ClientConfig::default();
    format!(
        r#"# mart client configuration

[client]
base_url = "{base_url}"
timeout_ms = {timeout_ms}
source_client = "{source_client}"
page_size = {page_size}
# token = "..."

[feed]
pages = 1

[environments.local]
base_url = "http://localhost:3000"
"#,
        base_url = client.base_url,
        timeout_ms = client.timeout_ms,
        source_client = client.source_client,
        page_size = client.page_size,
    )
}
