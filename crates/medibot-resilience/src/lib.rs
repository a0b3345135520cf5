//! # Medibot Resilience
//!
//! Backoff policy for retried gateway calls. The policy is a pure
//! function of the attempt index and failure classification; the gateway
//! client owns the loop and the waiting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backoff;

pub use backoff::{BackoffPolicy, Decision};
