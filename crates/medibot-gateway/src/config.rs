//! Gateway client configuration.

use medibot_core::{Error, GatewayResult};
use medibot_resilience::BackoffPolicy;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Placeholder value sometimes left in configs; treated the same as a
/// missing key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY_HERE";

/// Configuration for the gateway [`crate::Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the generative-language API.
    pub base_url: String,
    /// Model name appended to the endpoint path.
    pub model: String,
    /// API key, passed as the `key` query parameter.
    pub api_key: Option<SecretString>,
    /// Per-attempt request timeout. Independent of backoff timing.
    pub timeout: Duration,
    /// Retry/backoff policy consulted between attempts.
    pub backoff: BackoffPolicy,
}

impl ClientConfig {
    /// Default API base URL (Google AI Studio).
    pub const DEFAULT_BASE_URL: &'static str =
        "https://generativelanguage.googleapis.com/v1beta";
    /// Default model.
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";
    /// Default per-attempt timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Check whether a usable API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key_value()
            .map(|k| !k.trim().is_empty() && k != PLACEHOLDER_API_KEY)
            .unwrap_or(false)
    }

    /// Expose the API key value, if set.
    pub fn api_key_value(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret).map(String::as_str)
    }

    /// Ensure the credential is usable. Called before any network I/O.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] for a missing, blank, or
    /// placeholder key.
    pub fn validate_credential(&self) -> GatewayResult<()> {
        if self.has_api_key() {
            Ok(())
        } else {
            Err(Error::configuration(
                "API key is missing or still set to the placeholder value",
            ))
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Self::DEFAULT_TIMEOUT,
            backoff: BackoffPolicy::default(),
        }
    }
}
