//! reqwest transport
//!
//! Executes requests over a shared reqwest client and connection pool

use super::{Transport, TransportError, TransportRequest, TransportResponse};
use crate::config::TransportOptions;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport from options
    pub fn new(options: &TransportOptions) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("Invalid header name: {}", name))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", name))?;
            default_headers.insert(name, value);
        }

        let mut builder = Client::builder()
            .user_agent(options.user_agent.as_str())
            .default_headers(default_headers);

        if let Some(timeout) = options.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        debug!("Sending POST {}", request.url);

        let mut builder = self.client.post(request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| TransportError {
                message: e.to_string(),
                status: e.status().map(|s| s.as_u16()),
            })?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response body: {}", e)).with_status(status))?;

        debug!("Received {} bytes with status {}", body.len(), status);

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
