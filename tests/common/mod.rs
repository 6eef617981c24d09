//! Shared test transports

#![allow(dead_code)]

use async_trait::async_trait;
use qnamaker_client::{Transport, TransportError, TransportRequest, TransportResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Transport returning a canned outcome and recording what it was sent
pub struct MockTransport {
    outcome: Result<TransportResponse, TransportError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<TransportRequest>>,
}

impl MockTransport {
    pub fn respond(status: u16, body: &str) -> Self {
        Self::with_outcome(Ok(TransportResponse {
            status,
            body: body.as_bytes().to_vec(),
        }))
    }

    pub fn fail(error: TransportError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<TransportResponse, TransportError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        self.outcome.clone()
    }
}
