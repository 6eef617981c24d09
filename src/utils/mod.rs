//! Utilities module
//!
//! Contains error handling, HTML decoding and logging helpers

pub mod error;
pub mod html;
pub mod logging;
