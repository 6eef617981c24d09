//! generateAnswer wire models
//!
//! Request body and the validating parse of the heterogeneous response body

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// generateAnswer request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateAnswerRequest {
    /// Caller's question, sent verbatim
    pub question: String,
}

impl GenerateAnswerRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Answer entry as sent by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnswer {
    /// HTML-escaped answer text
    pub answer: String,
    pub questions: Vec<String>,
    /// Integer scores deserialize into the float
    pub score: f64,
}

/// Error envelope body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawError {
    pub code: String,
    pub message: ErrorMessage,
}

/// Error message, a list of strings or a lone string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    List(Vec<String>),
    Single(String),
}

impl ErrorMessage {
    /// Messages in order
    pub fn into_messages(self) -> Vec<String> {
        match self {
            ErrorMessage::List(messages) => messages,
            ErrorMessage::Single(message) => vec![message],
        }
    }
}

/// Classified response body
#[derive(Debug, Clone, PartialEq)]
pub enum QnaPayload {
    /// Top-level `answers` array
    Answers(Vec<RawAnswer>),
    /// Top-level `error` object
    Error(RawError),
    /// Anything else, with the reason it was rejected
    Malformed(String),
}

impl QnaPayload {
    /// Parse and classify raw response bytes
    ///
    /// The `error` key is checked before `answers`. Decoding is all-or-nothing:
    /// one bad answer entry rejects the whole payload.
    pub fn parse(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => return QnaPayload::Malformed(format!("body is not valid JSON: {}", e)),
        };

        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return QnaPayload::Malformed(format!(
                    "expected a JSON object, got {}",
                    json_type_name(&other)
                ))
            }
        };

        if let Some(error) = object.remove("error") {
            return match serde_json::from_value::<RawError>(error) {
                Ok(error) => QnaPayload::Error(error),
                Err(e) => QnaPayload::Malformed(format!("invalid error envelope: {}", e)),
            };
        }

        if let Some(answers) = object.remove("answers") {
            return match serde_json::from_value::<Vec<RawAnswer>>(answers) {
                Ok(answers) => QnaPayload::Answers(answers),
                Err(e) => QnaPayload::Malformed(format!("invalid answers array: {}", e)),
            };
        }

        QnaPayload::Malformed("neither `answers` nor `error` present".to_string())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers() {
        let body = br#"{"answers":[{"answer":"a","questions":["q"],"score":12}]}"#;
        match QnaPayload::parse(body) {
            QnaPayload::Answers(answers) => {
                assert_eq!(answers.len(), 1);
                assert_eq!(answers[0].score, 12.0);
            }
            other => panic!("Expected answers, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_wins_over_answers() {
        let body = br#"{"answers":[],"error":{"code":"X","message":["m"]}}"#;
        assert!(matches!(QnaPayload::parse(body), QnaPayload::Error(_)));
    }

    #[test]
    fn test_parse_single_string_message() {
        let body = br#"{"error":{"code":"Unauthorized","message":"Access denied"}}"#;
        match QnaPayload::parse(body) {
            QnaPayload::Error(error) => {
                assert_eq!(error.message.into_messages(), vec!["Access denied".to_string()]);
            }
            other => panic!("Expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(QnaPayload::parse(b"[1,2]"), QnaPayload::Malformed(_)));
        assert!(matches!(QnaPayload::parse(b"\"text\""), QnaPayload::Malformed(_)));
        assert!(matches!(QnaPayload::parse(b"<html>"), QnaPayload::Malformed(_)));
    }

    #[test]
    fn test_parse_missing_score_rejects_all() {
        let body = br#"{"answers":[
            {"answer":"a","questions":["q"],"score":1.5},
            {"answer":"b","questions":["q"]}
        ]}"#;
        assert!(matches!(QnaPayload::parse(body), QnaPayload::Malformed(_)));
    }
}
