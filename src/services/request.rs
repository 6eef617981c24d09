//! Request builder
//!
//! Assembles the authenticated generateAnswer request for a question

use crate::config::{Credential, QueryConfig};
use crate::models::qna::GenerateAnswerRequest;
use crate::transport::TransportRequest;
use crate::utils::error::{QnaError, QnaResult};
use reqwest::Url;
use tracing::debug;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CACHE_CONTROL_HEADER: &str = "Cache-Control";
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Parse a host URL, requiring an http(s) scheme and a host part
///
/// A trailing slash is dropped so the endpoint path can be appended.
pub fn parse_host_url(host_url: &str) -> QnaResult<Url> {
    let raw = host_url.trim();
    let mut url = Url::parse(raw).map_err(|e| QnaError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(QnaError::InvalidUrl(format!("{}: not an http(s) URL", raw)));
    }

    url.path_segments_mut()
        .map_err(|_| QnaError::InvalidUrl(format!("{}: cannot carry a path", raw)))?
        .pop_if_empty();

    Ok(url)
}

/// Build the generateAnswer endpoint URL
///
/// `{host}/knowledgebases/{id}/generateAnswer`, with the id trimmed and any
/// trailing slash on the host dropped. The id always lands in exactly one
/// path segment: characters such as `%` or `\` are percent-encoded, and ids
/// that the URL parser would treat as a path step are rejected.
pub fn build_url(host_url: &str, knowledgebase_id: &str) -> QnaResult<Url> {
    let kb_id = knowledgebase_id.trim();
    if kb_id.is_empty() {
        return Err(QnaError::InvalidUrl("knowledge base id is empty".to_string()));
    }
    if kb_id.contains(|c: char| c.is_whitespace() || matches!(c, '/' | '?' | '#')) {
        return Err(QnaError::InvalidUrl(format!(
            "knowledge base id contains reserved characters: {:?}",
            kb_id
        )));
    }
    // "." and ".." are dot segments, never a literal id
    if kb_id.chars().all(|c| c == '.') {
        return Err(QnaError::InvalidUrl(format!(
            "knowledge base id is a dot segment: {:?}",
            kb_id
        )));
    }

    let mut url = parse_host_url(host_url)?;
    url.path_segments_mut()
        .map_err(|_| QnaError::InvalidUrl(format!("{}: cannot carry a path", host_url.trim())))?
        .extend(["knowledgebases", kb_id, "generateAnswer"]);

    Ok(url)
}

/// Authentication header for a credential
pub fn auth_header(credential: &Credential) -> QnaResult<(String, String)> {
    match credential {
        Credential::SubscriptionKey(key) => {
            Ok((SUBSCRIPTION_KEY_HEADER.to_string(), key.clone()))
        }
        Credential::EndpointKey(_) => {
            let key = credential.endpoint_key().ok_or(QnaError::MissingCredential)?;
            Ok((AUTHORIZATION_HEADER.to_string(), format!("EndpointKey {}", key)))
        }
    }
}

/// Serialize the question body
pub fn build_body(question: &str) -> QnaResult<Vec<u8>> {
    let body = serde_json::to_vec(&GenerateAnswerRequest::new(question))?;
    Ok(body)
}

/// Builds requests for one knowledge base
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    host_url: String,
    knowledgebase_id: String,
    credential: Credential,
}

impl RequestBuilder {
    /// Create a builder from query configuration
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            host_url: config.host_url.clone(),
            knowledgebase_id: config.knowledgebase_id.trim().to_string(),
            credential: config.credential.clone(),
        }
    }

    /// Endpoint URL for this knowledge base
    pub fn endpoint_url(&self) -> QnaResult<Url> {
        build_url(&self.host_url, &self.knowledgebase_id)
    }

    /// Knowledge base id, trimmed
    pub fn knowledgebase_id(&self) -> &str {
        &self.knowledgebase_id
    }

    /// Assemble the full request for `question`
    ///
    /// Fails before any I/O on a bad URL, a missing endpoint key or a body
    /// that cannot be encoded.
    pub fn build(&self, question: &str) -> QnaResult<TransportRequest> {
        let url = self.endpoint_url()?;
        let (auth_name, auth_value) = auth_header(&self.credential)?;
        let body = build_body(question)?;

        debug!(
            "Built generateAnswer request: {} ({}, {} byte body)",
            url,
            self.credential.mode(),
            body.len()
        );

        Ok(TransportRequest {
            url,
            headers: vec![
                (CONTENT_TYPE_HEADER.to_string(), "application/json".to_string()),
                (auth_name, auth_value),
                (CACHE_CONTROL_HEADER.to_string(), "no-cache".to_string()),
            ],
            body,
        })
    }
}
