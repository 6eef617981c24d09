//! QnA client service
//!
//! Ties the request builder, the transport and the response interpreter
//! together behind `ask`

use super::interpreter;
use super::request::RequestBuilder;
use crate::config::QueryConfig;
use crate::models::{Answer, ServiceError};
use crate::transport::{ReqwestTransport, Transport};
use crate::utils::error::QnaResult;
use crate::utils::logging::question_log_summary;
use anyhow::Result;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

/// Split an `ask` result into the callback pair, exactly one side is `Some`
pub fn into_completion(result: QnaResult<Vec<Answer>>) -> (Option<Vec<Answer>>, Option<ServiceError>) {
    match result {
        Ok(answers) => (Some(answers), None),
        Err(e) => (None, Some(e.into())),
    }
}

/// QnA knowledge base client
///
/// Cheap to clone. Holds no per-request state, so concurrent calls on the
/// same instance are independent.
#[derive(Clone)]
pub struct QnaClient {
    requests: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for QnaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QnaClient")
            .field("requests", &self.requests)
            .field("transport", &self.transport.name())
            .finish()
    }
}

impl QnaClient {
    /// Create a client backed by reqwest
    pub fn new(config: QueryConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.transport)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: QueryConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            requests: RequestBuilder::new(&config),
            transport,
        }
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(QueryConfig::from_env()?)
    }

    /// Ask the knowledge base a question
    ///
    /// Performs exactly one request. Answers keep the service's order.
    pub async fn ask(&self, question: &str) -> QnaResult<Vec<Answer>> {
        let request_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "qna_ask",
            request_id = %request_id,
            kb = %self.requests.knowledgebase_id(),
        );

        async move {
            info!("Asking: {}", question_log_summary(question));

            let request = match self.requests.build(question) {
                Ok(request) => request,
                Err(e) => {
                    warn!("Request not sent: {}", e);
                    return Err(e);
                }
            };

            debug!("Dispatching via {} transport", self.transport.name());
            let result = interpreter::interpret(self.transport.execute(request).await);

            match &result {
                Ok(answers) => info!("Received {} answers", answers.len()),
                Err(e) => warn!("Ask failed: {} (status {})", e, e.status_code()),
            }

            result
        }
        .instrument(span)
        .await
    }

    /// Ask on a spawned task and deliver the outcome to `on_complete`
    ///
    /// `on_complete` runs once on a runtime worker, with exactly one of its
    /// arguments set, unless the returned handle is cancelled first. Must be
    /// called within a tokio runtime.
    pub fn ask_with_callback<F>(&self, question: impl Into<String>, on_complete: F) -> AskHandle
    where
        F: FnOnce(Option<Vec<Answer>>, Option<ServiceError>) + Send + 'static,
    {
        let client = self.clone();
        let question = question.into();

        let task = tokio::spawn(async move {
            let (answers, error) = into_completion(client.ask(&question).await);
            on_complete(answers, error);
        });

        AskHandle { task }
    }
}

/// Handle to an in-flight `ask_with_callback` call
#[derive(Debug)]
pub struct AskHandle {
    task: JoinHandle<()>,
}

impl AskHandle {
    /// Abort the call; the callback will not run if it has not already
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the call has finished, callback included, or was cancelled
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the call, returns false if it was cancelled
    pub async fn join(self) -> bool {
        match self.task.await {
            Ok(()) => true,
            Err(e) if e.is_cancelled() => false,
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}
