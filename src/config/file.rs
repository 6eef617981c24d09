//! File-based configuration loading
//!
//! Loads the query configuration from a JSON file

use super::settings::{Credential, LoggingConfig, QueryConfig, TransportOptions, DEFAULT_HOST_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Configuration file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Host URL (default: the public QnA Maker v2.0 host)
    #[serde(default = "default_host_url")]
    pub host_url: String,

    /// Knowledge base identifier
    pub knowledgebase_id: String,

    /// Subscription key (older API generation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_key: Option<String>,

    /// Endpoint key (newer API generation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_key: Option<String>,

    /// Select endpoint-key mode even when no key is present
    #[serde(default)]
    pub use_endpoint_key: bool,

    /// HTTP transport options
    #[serde(default)]
    pub transport: TransportOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_host_url() -> String {
    DEFAULT_HOST_URL.to_string()
}

impl ConfigFile {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| "Failed to parse config JSON")?;

        config.validate()?;

        debug!("Loaded configuration for knowledge base {}", config.knowledgebase_id.trim());
        Ok(config)
    }

    /// Load configuration from default locations
    /// Searches in order:
    /// 1. ~/.config/qnamaker/qnamaker.json
    /// 2. ./qnamaker.json
    ///
    /// Returns error if no configuration file is found.
    pub fn load_default() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("qnamaker").join("qnamaker.json");
            if config_path.exists() {
                return Self::load(&config_path);
            }
        }

        let local_path = Path::new("qnamaker.json");
        if local_path.exists() {
            return Self::load(local_path);
        }

        anyhow::bail!(
            "Configuration file not found. Please create one at:\n\
             - ~/.config/qnamaker/qnamaker.json (recommended)\n\
             - ./qnamaker.json (current directory)"
        )
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.subscription_key.is_some() && (self.endpoint_key.is_some() || self.use_endpoint_key) {
            anyhow::bail!("subscriptionKey and endpointKey are mutually exclusive");
        }

        if self.subscription_key.is_none() && self.endpoint_key.is_none() && !self.use_endpoint_key {
            anyhow::bail!("One of subscriptionKey or endpointKey must be configured");
        }

        self.logging.validate()?;

        Ok(())
    }

    /// Credential selected by this file
    pub fn credential(&self) -> Credential {
        match &self.subscription_key {
            Some(key) => Credential::SubscriptionKey(key.clone()),
            None => Credential::EndpointKey(self.endpoint_key.clone()),
        }
    }

    /// Build the query configuration
    pub fn to_query_config(&self) -> Result<QueryConfig> {
        let config = QueryConfig::new(&self.host_url, &self.knowledgebase_id, self.credential())
            .with_transport(self.transport.clone());
        config.validate()?;
        Ok(config)
    }
}
