//! QnA Maker Client Library
//!
//! Asks a QnA Maker knowledge base questions through its generateAnswer
//! endpoint and returns ranked answers or a typed error

pub mod config;
pub mod models;
pub mod services;
pub mod transport;
pub mod utils;

// Re-export common types
pub use config::{ConfigFile, Credential, LoggingConfig, QueryConfig, TransportOptions};
pub use models::{Answer, ServiceError};
pub use services::{AskHandle, QnaClient, RequestBuilder};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse};
pub use utils::error::{ErrorKind, QnaError, QnaResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
