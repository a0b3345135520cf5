//! User-facing error copy.
//!
//! Every error kind maps to exactly one message, so the surface a caller
//! renders is never a raw transport string and never a perpetual spinner.

use medibot_core::{Error, ErrorKind};

/// One human-readable message per error kind.
pub fn user_message(error: &Error) -> String {
    match error.kind() {
        ErrorKind::Configuration => {
            "The assistant is not configured yet. Please add a valid API key.".to_string()
        }
        ErrorKind::RateLimited => {
            "The assistant is receiving too many requests right now. Please wait a moment and try again.".to_string()
        }
        ErrorKind::ServerError => {
            "The assistant service had a problem answering. Please try again shortly.".to_string()
        }
        ErrorKind::NetworkError => {
            "Could not reach the assistant service. Please check your connection and try again.".to_string()
        }
        ErrorKind::ClientError => {
            format!("The request could not be processed: {error}")
        }
        ErrorKind::EmptyResponse => {
            "The assistant could not generate a response. Please try again.".to_string()
        }
        ErrorKind::Malformed => {
            "The assistant returned an answer in an unexpected format.".to_string()
        }
        ErrorKind::Exhausted => {
            "The assistant did not respond after several attempts. Please try again later.".to_string()
        }
    }
}
