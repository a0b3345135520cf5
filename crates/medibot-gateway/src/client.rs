//! Gateway client: one logical query with retry semantics.

use crate::config::ClientConfig;
use crate::wire::{ErrorEnvelope, GenerateRequest, GenerateResponse};
use medibot_core::{Completion, Error, FailureClass, GatewayResult, Query};
use medibot_resilience::{BackoffPolicy, Decision};
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the generative-language endpoint.
///
/// Cheap to clone; concurrent calls share no mutable state, so any number
/// of queries may be in flight at once.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl Client {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from a configuration.
    ///
    /// A missing credential is not an error here; it is reported by
    /// [`Client::generate`] before any network call, so a partially
    /// configured client can still serve offline features.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> GatewayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute one logical query, retrying transient failures per the
    /// backoff policy.
    ///
    /// Exactly one terminal outcome per call: a [`Completion`] with
    /// non-empty text, or an error from the taxonomy. Transient failures
    /// (429, 5xx, network) are retried with exponentially increasing,
    /// jittered waits; once attempts are exhausted the last failure is
    /// wrapped in [`Error::Exhausted`]. Client errors, empty completions,
    /// and malformed bodies settle immediately.
    #[instrument(skip(self, query), fields(model = %self.config.model))]
    pub async fn generate(&self, query: &Query) -> GatewayResult<Completion> {
        // Fail fast on an unusable credential; no request is issued.
        self.config.validate_credential()?;

        let url = self.endpoint_url();
        let body = GenerateRequest::from_query(query);
        let mut attempt: u32 = 0;

        loop {
            match self.attempt_once(&url, &body).await {
                Ok(completion) => {
                    if attempt > 0 {
                        debug!(attempt = attempt + 1, "Query succeeded after retries");
                    }
                    return Ok(completion);
                }
                Err(error) => {
                    let Some(class) = error.failure_class() else {
                        return Err(error);
                    };

                    match self.config.backoff.decide(attempt, class) {
                        Decision::Retry(delay) => {
                            warn!(
                                attempt = attempt + 1,
                                delay_ms = delay.as_millis() as u64,
                                error = %error,
                                "Retrying after transient failure"
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                        }
                        Decision::Stop => {
                            return Err(if class == FailureClass::ClientError {
                                error
                            } else {
                                Error::exhausted(attempt + 1, error)
                            });
                        }
                    }
                }
            }
        }
    }

    /// Issue a single request and map its outcome into the taxonomy.
    async fn attempt_once(
        &self,
        url: &str,
        body: &GenerateRequest,
    ) -> GatewayResult<Completion> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::network(format!("Failed to read response body: {e}")))?;

        if !(200..300).contains(&status) {
            return Err(classify_status(status, &text));
        }

        let envelope: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| Error::malformed(format!("Invalid response JSON: {e}"), text.clone()))?;

        if !envelope.has_candidates() {
            return Err(Error::malformed("No candidates in response", text));
        }

        let completion_text = envelope.text();
        if completion_text.trim().is_empty() {
            // A 2xx with empty text is a content problem; retrying an
            // empty-but-200 response rarely helps, so it settles at once.
            return Err(Error::EmptyResponse);
        }

        let sources = envelope.sources();
        Ok(Completion {
            text: completion_text,
            sources,
        })
    }

    /// Endpoint URL with the credential as a query parameter. Never logged.
    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key_value().unwrap_or_default()
        )
    }
}

/// Map HTTP error statuses into the failure taxonomy.
fn classify_status(status: u16, body: &str) -> Error {
    let message = ErrorEnvelope::message_for(status, body);
    match status {
        429 => Error::rate_limited(message),
        500..=599 => Error::server(status, message),
        _ => Error::client(status, message),
    }
}

/// Map reqwest transport failures. Timeouts and connection failures are
/// both network-class and follow the normal backoff path.
fn map_transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::network("Request timed out")
    } else if error.is_connect() {
        Error::network(format!("Connection failed: {error}"))
    } else {
        Error::network(error.to_string())
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    model: Option<String>,
    api_key: Option<SecretString>,
    timeout: Option<Duration>,
    backoff: Option<BackoffPolicy>,
}

impl ClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the backoff policy.
    pub fn backoff(mut self, policy: BackoffPolicy) -> Self {
        self.backoff = Some(policy);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns [`Error::Configuration`] if the HTTP client cannot be built.
    pub fn build(self) -> GatewayResult<Client> {
        let defaults = ClientConfig::default();
        Client::new(ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            model: self.model.unwrap_or(defaults.model),
            api_key: self.api_key,
            timeout: self.timeout.unwrap_or(defaults.timeout),
            backoff: self.backoff.unwrap_or(defaults.backoff),
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .field("has_api_key", &self.config.has_api_key())
            .finish()
    }
}
