//! Client configuration settings
//!
//! Defines the query configuration structures and environment loading logic

use crate::services::request::parse_host_url;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default QnA Maker host
pub const DEFAULT_HOST_URL: &str = "https://westus.api.cognitive.microsoft.com/qnamaker/v2.0";

/// Default user agent for the HTTP client
pub const DEFAULT_USER_AGENT: &str = concat!("qnamaker-client/", env!("CARGO_PKG_VERSION"));

/// Authentication credential
///
/// Subscription keys belong to the older API generation, endpoint keys to the
/// newer one. The two modes are mutually exclusive.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Sent as `Ocp-Apim-Subscription-Key: <key>`
    SubscriptionKey(String),
    /// Sent as `Authorization: EndpointKey <key>`
    EndpointKey(Option<String>),
}

impl Credential {
    /// Endpoint key usable for a request, None when absent or blank
    pub fn endpoint_key(&self) -> Option<&str> {
        match self {
            Credential::EndpointKey(Some(key)) if !key.trim().is_empty() => Some(key.as_str()),
            _ => None,
        }
    }

    /// Mode name for logs
    pub fn mode(&self) -> &'static str {
        match self {
            Credential::SubscriptionKey(_) => "subscription_key",
            Credential::EndpointKey(_) => "endpoint_key",
        }
    }
}

// Keys never reach logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::SubscriptionKey(_) => f.write_str("SubscriptionKey(***)"),
            Credential::EndpointKey(Some(_)) => f.write_str("EndpointKey(***)"),
            Credential::EndpointKey(None) => f.write_str("EndpointKey(None)"),
        }
    }
}

/// HTTP transport options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOptions {
    /// Request timeout in seconds, None keeps the HTTP client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// User agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Extra headers sent with every request
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text/json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Load from `RUST_LOG` / `LOG_FORMAT`
    pub fn from_env() -> Result<Self> {
        let config = Self {
            level: get_env_or_default("RUST_LOG", "info"),
            format: get_env_or_default("LOG_FORMAT", "text"),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.format);
        }

        Ok(())
    }
}

/// Query configuration, fixed for the lifetime of a client
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    /// Host URL the endpoint path is appended to
    pub host_url: String,
    /// Knowledge base identifier, stored trimmed
    pub knowledgebase_id: String,
    /// Authentication credential
    pub credential: Credential,
    /// HTTP transport options
    pub transport: TransportOptions,
}

impl QueryConfig {
    /// Create a configuration with default transport options
    pub fn new(
        host_url: impl Into<String>,
        knowledgebase_id: impl AsRef<str>,
        credential: Credential,
    ) -> Self {
        Self {
            host_url: host_url.into(),
            knowledgebase_id: knowledgebase_id.as_ref().trim().to_string(),
            credential,
            transport: TransportOptions::default(),
        }
    }

    /// Create a configuration against the default host
    pub fn with_default_host(knowledgebase_id: impl AsRef<str>, credential: Credential) -> Self {
        Self::new(DEFAULT_HOST_URL, knowledgebase_id, credential)
    }

    /// Replace transport options
    pub fn with_transport(mut self, transport: TransportOptions) -> Self {
        self.transport = transport;
        self
    }

    /// Load configuration from environment variables
    ///
    /// `QNA_ENDPOINT_KEY` selects endpoint-key mode and wins over
    /// `QNA_SUBSCRIPTION_KEY`.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let knowledgebase_id = std::env::var("QNA_KNOWLEDGEBASE_ID")
            .context("QNA_KNOWLEDGEBASE_ID environment variable not set")?;

        let credential = match (
            std::env::var("QNA_ENDPOINT_KEY").ok(),
            std::env::var("QNA_SUBSCRIPTION_KEY").ok(),
        ) {
            (Some(key), _) => Credential::EndpointKey(Some(key)),
            (None, Some(key)) => Credential::SubscriptionKey(key),
            (None, None) => anyhow::bail!(
                "Either QNA_ENDPOINT_KEY or QNA_SUBSCRIPTION_KEY environment variable must be set"
            ),
        };

        let timeout_secs = match std::env::var("QNA_TIMEOUT") {
            Ok(value) => Some(value.parse().context("Invalid timeout value")?),
            Err(_) => None,
        };

        let config = Self::new(
            get_env_or_default("QNA_HOST_URL", DEFAULT_HOST_URL),
            knowledgebase_id,
            credential,
        )
        .with_transport(TransportOptions {
            timeout_secs,
            ..TransportOptions::default()
        });

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration validity
    ///
    /// A missing endpoint key is not rejected here; it surfaces per call.
    pub fn validate(&self) -> Result<()> {
        if self.knowledgebase_id.is_empty() {
            anyhow::bail!("Knowledge base id cannot be empty");
        }

        parse_host_url(&self.host_url).context("Invalid host URL")?;

        if self.transport.timeout_secs == Some(0) {
            anyhow::bail!("Timeout value cannot be 0");
        }

        if let Credential::SubscriptionKey(key) = &self.credential {
            if key.contains(char::is_whitespace) {
                anyhow::bail!("Subscription key cannot contain whitespace characters");
            }
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
