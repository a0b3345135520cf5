//! Mock generative-language server for integration testing
//!
//! Wraps a wiremock server behind the `generateContent` URL shape so tests
//! can script status sequences and inspect the requests the client sent.

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use medibot_gateway::{Client, ClientConfig};
use medibot_resilience::BackoffPolicy;

/// Base delay used by test clients; small enough to keep retry tests fast.
pub const TEST_BASE_DELAY: Duration = Duration::from_millis(10);

/// API key the test clients authenticate with.
pub const TEST_API_KEY: &str = "test-key";

/// Mock Gemini `generateContent` server.
pub struct MockGemini {
    /// The underlying wiremock server.
    pub server: MockServer,
}

impl MockGemini {
    /// Start a fresh mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// The endpoint path the client is expected to hit.
    pub fn endpoint_path() -> String {
        format!("/models/{}:generateContent", ClientConfig::DEFAULT_MODEL)
    }

    /// Build a gateway client pointed at this server, with `max_attempts`
    /// tries and a short base delay.
    pub fn client(&self, max_attempts: u32) -> Client {
        Client::builder()
            .base_url(self.server.uri())
            .api_key(TEST_API_KEY)
            .backoff(BackoffPolicy::new(max_attempts, TEST_BASE_DELAY))
            .build()
            .expect("client builds")
    }

    /// Respond with a 200 and the given JSON body to every request.
    pub async fn respond_ok(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint_path()))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond with `status` and an error envelope to the first `times`
    /// requests. Once spent, requests fall through to mocks mounted after
    /// this one.
    pub async fn respond_status_n_times(&self, status: u16, times: u64) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint_path()))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(crate::fixtures::error_body(status, "scripted failure")),
            )
            .up_to_n_times(times)
            .mount(&self.server)
            .await;
    }

    /// Respond with `status` and a body to every request.
    pub async fn respond_status(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint_path()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// All requests the server has received so far.
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// How many requests the server has received so far.
    pub async fn request_count(&self) -> usize {
        self.received().await.len()
    }
}
