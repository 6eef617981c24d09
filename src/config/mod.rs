//! Configuration management module
//!
//! Responsible for loading and managing client configuration from code,
//! environment variables or a JSON file

pub mod file;
pub mod settings;

pub use file::ConfigFile;
pub use settings::{Credential, LoggingConfig, QueryConfig, TransportOptions, DEFAULT_HOST_URL};
