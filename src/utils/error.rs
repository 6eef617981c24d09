//! Error handling module
//!
//! Defines the failure taxonomy of a single `ask` call and its mapping onto
//! the caller-facing [`ServiceError`] record

use crate::models::ServiceError;
use thiserror::Error;

/// Title used for every failure detected locally (not reported by the service)
pub const LOCAL_ERROR_TITLE: &str = "error";

/// Description used when a service error envelope carries no messages
pub const EMPTY_MESSAGE_FALLBACK: &str = "error";

/// Description used for payloads that are neither answers nor an error envelope
pub const INVALID_RESULTS_MESSAGE: &str = "Invalid API Results provided";

/// Failures of a single `ask` call
#[derive(Error, Debug)]
pub enum QnaError {
    /// Host and knowledge base id do not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Endpoint-key mode selected without a key
    #[error("Missing authorization key")]
    MissingCredential,

    /// Question body could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP call failed or produced no usable response
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        status_code: Option<u16>,
    },

    /// Response body is not a recognizable payload
    #[error("Malformed response ({status_code}): {reason}")]
    MalformedResponse {
        reason: String,
        status_code: u16,
    },

    /// Upstream returned an error envelope
    #[error("Service error {code} ({status_code}): {message}")]
    Service {
        code: String,
        message: String,
        status_code: u16,
    },
}

/// Stable classification of [`QnaError`] for matching without payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidUrl,
    MissingCredential,
    SerializationFailure,
    TransportFailure,
    MalformedResponse,
    ServiceReportedError,
}

impl QnaError {
    /// Get error classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            QnaError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            QnaError::MissingCredential => ErrorKind::MissingCredential,
            QnaError::Serialization(_) => ErrorKind::SerializationFailure,
            QnaError::Transport { .. } => ErrorKind::TransportFailure,
            QnaError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            QnaError::Service { .. } => ErrorKind::ServiceReportedError,
        }
    }

    /// Get HTTP status code, 0 when no response exists
    pub fn status_code(&self) -> u16 {
        match self {
            QnaError::InvalidUrl(_)
            | QnaError::MissingCredential
            | QnaError::Serialization(_) => 0,
            QnaError::Transport { status_code, .. } => status_code.unwrap_or(0),
            QnaError::MalformedResponse { status_code, .. }
            | QnaError::Service { status_code, .. } => *status_code,
        }
    }

    /// Get error title as surfaced to callers
    pub fn title(&self) -> &str {
        match self {
            QnaError::Service { code, .. } => code,
            _ => LOCAL_ERROR_TITLE,
        }
    }

    /// Get error description as surfaced to callers
    pub fn description(&self) -> String {
        match self {
            QnaError::InvalidUrl(_) => "Invalid URL: Unable to create API URL".to_string(),
            QnaError::MissingCredential => "Missing authorization key".to_string(),
            QnaError::Serialization(_) => "Unable to serialize parameters".to_string(),
            QnaError::Transport { message, .. } => message.clone(),
            QnaError::MalformedResponse { .. } => INVALID_RESULTS_MESSAGE.to_string(),
            QnaError::Service { message, .. } => message.clone(),
        }
    }

    /// Convert to the caller-facing error record
    pub fn to_service_error(&self) -> ServiceError {
        ServiceError {
            title: self.title().to_string(),
            description: self.description(),
            status_code: self.status_code(),
        }
    }
}

impl From<QnaError> for ServiceError {
    fn from(error: QnaError) -> Self {
        error.to_service_error()
    }
}

impl From<&QnaError> for ServiceError {
    fn from(error: &QnaError) -> Self {
        error.to_service_error()
    }
}

/// Result type alias
pub type QnaResult<T> = Result<T, QnaError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create malformed response error
    pub fn malformed(reason: impl Into<String>, status_code: u16) -> QnaError {
        QnaError::MalformedResponse {
            reason: reason.into(),
            status_code,
        }
    }

    /// Create transport error
    pub fn transport_error(message: impl Into<String>, status_code: Option<u16>) -> QnaError {
        QnaError::Transport {
            message: message.into(),
            status_code,
        }
    }

    /// Create service error, taking the first message as description
    pub fn service_error(code: impl Into<String>, messages: &[String], status_code: u16) -> QnaError {
        QnaError::Service {
            code: code.into(),
            message: messages
                .first()
                .cloned()
                .unwrap_or_else(|| EMPTY_MESSAGE_FALLBACK.to_string()),
            status_code,
        }
    }
}
