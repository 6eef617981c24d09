//! Response interpreter
//!
//! Maps a transport outcome onto answers or a typed error

use crate::models::qna::{QnaPayload, RawAnswer};
use crate::models::Answer;
use crate::transport::{TransportError, TransportResponse};
use crate::utils::error::{helpers, QnaResult};
use crate::utils::html::decode_entities;
use tracing::{debug, warn};

/// Interpret the outcome of a transport call
pub fn interpret(outcome: Result<TransportResponse, TransportError>) -> QnaResult<Vec<Answer>> {
    match outcome {
        Ok(response) => interpret_response(response.status, &response.body),
        Err(e) => {
            warn!("Transport failed: {} (status: {:?})", e.message, e.status);
            Err(helpers::transport_error(e.message, e.status))
        }
    }
}

/// Interpret a received HTTP response
///
/// The HTTP status does not gate interpretation: the body decides the
/// outcome and the status is carried into any error.
pub fn interpret_response(status: u16, body: &[u8]) -> QnaResult<Vec<Answer>> {
    match QnaPayload::parse(body) {
        QnaPayload::Error(error) => {
            let messages = error.message.into_messages();
            warn!("Service reported error {} with status {}", error.code, status);
            Err(helpers::service_error(error.code, &messages, status))
        }
        QnaPayload::Answers(raw) => {
            let answers: Vec<Answer> = raw.into_iter().map(to_answer).collect();
            debug!("Decoded {} answers (status {})", answers.len(), status);
            Ok(answers)
        }
        QnaPayload::Malformed(reason) => {
            warn!("Invalid API results (status {}): {}", status, reason);
            Err(helpers::malformed(reason, status))
        }
    }
}

fn to_answer(raw: RawAnswer) -> Answer {
    Answer {
        answer_text: decode_entities(&raw.answer).into_owned(),
        questions: raw.questions,
        score: raw.score,
    }
}
