//! Logging utilities
//!
//! Subscriber setup and log-safe summaries of outgoing queries

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Maximum question length written to logs
pub const QUESTION_LOG_LIMIT: usize = 80;

/// Truncate a string with a note about how much was cut
pub fn truncate_content(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_len {
        let head: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", head, char_count - max_len)
    } else {
        s.to_string()
    }
}

/// Question text as it may appear in logs
pub fn question_log_summary(question: &str) -> String {
    truncate_content(question, QUESTION_LOG_LIMIT)
}

/// Install a global tracing subscriber
///
/// `RUST_LOG` overrides the configured level. Returns false if a subscriber
/// was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let result = if config.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init()
    };

    result.is_ok()
}
