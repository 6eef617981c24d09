//! Error handling module unit tests

use qnamaker_client::utils::error::helpers::*;
use qnamaker_client::utils::error::*;
use qnamaker_client::ServiceError;

fn serialization_error() -> QnaError {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    QnaError::from(err)
}

#[test]
fn test_error_kinds() {
    let test_cases = vec![
        (QnaError::InvalidUrl("x".to_string()), ErrorKind::InvalidUrl),
        (QnaError::MissingCredential, ErrorKind::MissingCredential),
        (serialization_error(), ErrorKind::SerializationFailure),
        (transport_error("reset", None), ErrorKind::TransportFailure),
        (malformed("not json", 200), ErrorKind::MalformedResponse),
        (service_error("KBNotFound", &[], 404), ErrorKind::ServiceReportedError),
    ];

    for (error, expected_kind) in test_cases {
        assert_eq!(error.kind(), expected_kind);
    }
}

#[test]
fn test_service_error_records() {
    let test_cases = vec![
        (
            QnaError::InvalidUrl("x".to_string()),
            ("error", "Invalid URL: Unable to create API URL", 0),
        ),
        (QnaError::MissingCredential, ("error", "Missing authorization key", 0)),
        (serialization_error(), ("error", "Unable to serialize parameters", 0)),
        (transport_error("connection reset", None), ("error", "connection reset", 0)),
        (transport_error("truncated body", Some(200)), ("error", "truncated body", 200)),
        (malformed("not json", 502), ("error", "Invalid API Results provided", 502)),
        (
            service_error("KBNotFound", &["No knowledge base.".to_string()], 404),
            ("KBNotFound", "No knowledge base.", 404),
        ),
    ];

    for (error, (title, description, status_code)) in test_cases {
        let record: ServiceError = error.into();
        assert_eq!(record.title, title);
        assert_eq!(record.description, description);
        assert_eq!(record.status_code, status_code);
    }
}

#[test]
fn test_error_display() {
    assert_eq!(QnaError::MissingCredential.to_string(), "Missing authorization key");
    assert_eq!(
        malformed("neither key present", 200).to_string(),
        "Malformed response (200): neither key present"
    );
    assert_eq!(
        service_error("Unauthorized", &["Bad key".to_string()], 401).to_string(),
        "Service error Unauthorized (401): Bad key"
    );
}

#[test]
fn test_service_error_display() {
    let record = ServiceError {
        title: "KBNotFound".to_string(),
        description: "No knowledge base.".to_string(),
        status_code: 404,
    };
    assert_eq!(record.to_string(), "KBNotFound (404): No knowledge base.");
}

#[test]
fn test_service_error_serialization() {
    let record = ServiceError {
        title: "error".to_string(),
        description: "Missing authorization key".to_string(),
        status_code: 0,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["statusCode"], 0);
    assert_eq!(json["title"], "error");
}
