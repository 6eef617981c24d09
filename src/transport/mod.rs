//! Transport module
//!
//! Defines the Transport trait, the seam between request building and the
//! HTTP client that executes the request

pub mod http;

use async_trait::async_trait;
use std::fmt;
use reqwest::Url;

pub use self::http::ReqwestTransport;

/// Outgoing POST request, fully assembled
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// Endpoint URL
    pub url: Url,
    /// Header name/value pairs in insertion order
    pub headers: Vec<(String, String)>,
    /// JSON body bytes
    pub body: Vec<u8>,
}

impl TransportRequest {
    /// Look up a header value, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body bytes
    pub body: Vec<u8>,
}

/// Failure reported by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// Description of the failure
    pub message: String,
    /// Status of the response, if one was received
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransportError {}

/// HTTP collaborator executing one request per call
///
/// Implementations must not retry. Timeouts are whatever the implementation
/// applies by default.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Get the transport name
    fn name(&self) -> &str;

    /// Execute a POST request
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}
