//! Service layer module
//!
//! Contains the request builder, response interpreter and the client that
//! drives them

pub mod client;
pub mod interpreter;
pub mod request;

pub use client::{into_completion, AskHandle, QnaClient};
pub use request::RequestBuilder;
