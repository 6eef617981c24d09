//! Data models module
//!
//! Defines the caller-facing answer and error records, plus the wire
//! structures of the generateAnswer endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod qna;

/// One candidate answer returned by the knowledge base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Answer text with HTML entities decoded
    pub answer_text: String,
    /// Knowledge base questions this answer is attached to
    pub questions: Vec<String>,
    /// Confidence score as reported by the service
    pub score: f64,
}

impl Answer {
    /// Create a new answer record
    pub fn new(answer_text: impl Into<String>, questions: Vec<String>, score: f64) -> Self {
        Self {
            answer_text: answer_text.into(),
            questions,
            score,
        }
    }

    /// Whether the service reported a whole-number score
    pub fn is_integral_score(&self) -> bool {
        self.score.is_finite() && self.score.fract() == 0.0
    }

    /// Pick the highest scoring answer, first one wins on ties
    pub fn best(answers: &[Answer]) -> Option<&Answer> {
        answers.iter().fold(None, |best: Option<&Answer>, candidate| match best {
            Some(current) if current.score >= candidate.score => Some(current),
            _ => Some(candidate),
        })
    }
}

/// Failure record delivered to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// Upstream error code, or "error" for local failures
    pub title: String,
    /// Human readable description
    pub description: String,
    /// HTTP status, 0 when no response was received
    pub status_code: u16,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.title, self.status_code, self.description)
    }
}

impl std::error::Error for ServiceError {}
