//! Integration tests for the medibot assistant
//!
//! Covers the full path from adapter to mocked endpoint:
//! - Gateway retry and settlement behavior against a wiremock server
//! - Feature adapters (chat, symptoms, doctor search) end to end
//! - Response grounding and degraded-output fallbacks

pub mod fixtures;
pub mod mock_gemini;

// Re-export commonly used items
pub use fixtures::*;
pub use mock_gemini::*;

#[cfg(test)]
mod adapter_tests;
#[cfg(test)]
mod gateway_tests;
