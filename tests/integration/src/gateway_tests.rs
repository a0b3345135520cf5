//! Gateway settlement behavior against a scripted endpoint.

use std::time::Instant;

use pretty_assertions::assert_eq;

use medibot_core::{Error, ErrorKind, Expectation, Query};

use crate::fixtures;
use crate::mock_gemini::{MockGemini, TEST_BASE_DELAY};

fn free_text_query(prompt: &str) -> Query {
    Query::builder()
        .prompt(prompt)
        .expects(Expectation::FreeText)
        .build()
        .expect("query builds")
}

#[tokio::test]
async fn recovers_after_transient_rate_limits() {
    let mock = MockGemini::start().await;
    mock.respond_status_n_times(429, 2).await;
    mock.respond_ok(fixtures::text_response("all good now")).await;

    let client = mock.client(5);
    let completion = client
        .generate(&free_text_query("hello"))
        .await
        .expect("settles successfully after retries");

    assert_eq!(completion.text, "all good now");
    assert_eq!(mock.request_count().await, 3);
}

#[tokio::test]
async fn retry_delays_respect_exponential_floor() {
    let mock = MockGemini::start().await;
    mock.respond_status_n_times(429, 3).await;
    mock.respond_ok(fixtures::text_response("ok")).await;

    let client = mock.client(4);
    let started = Instant::now();
    client
        .generate(&free_text_query("hello"))
        .await
        .expect("fourth attempt succeeds");
    let elapsed = started.elapsed();

    // Three waits with delays of at least base, 2*base, and 4*base.
    assert!(
        elapsed >= TEST_BASE_DELAY * 7,
        "elapsed {elapsed:?} below the exponential floor"
    );
}

#[tokio::test]
async fn exhaustion_reports_attempts_and_last_failure() {
    let mock = MockGemini::start().await;
    mock.respond_status_n_times(503, u64::MAX).await;

    let client = mock.client(3);
    let err = client
        .generate(&free_text_query("hello"))
        .await
        .expect_err("exhausts");

    match err {
        Error::Exhausted { attempts, last } => {
            assert_eq!(attempts, 3);
            assert_eq!(last.kind(), ErrorKind::ServerError);
        }
        other => panic!("expected Exhausted, got {other:?}"),
    }
    assert_eq!(mock.request_count().await, 3);
}

#[tokio::test]
async fn client_errors_settle_without_retry() {
    let mock = MockGemini::start().await;
    mock.respond_status(404, fixtures::error_body(404, "model not found"))
        .await;

    let client = mock.client(5);
    let err = client
        .generate(&free_text_query("hello"))
        .await
        .expect_err("client error is terminal");

    assert_eq!(err.kind(), ErrorKind::ClientError);
    assert_eq!(mock.request_count().await, 1);
}

#[tokio::test]
async fn missing_credential_never_reaches_the_network() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::text_response("should not be seen"))
        .await;

    let client = medibot_gateway::Client::builder()
        .base_url(mock.server.uri())
        .build()
        .expect("client builds without a key");

    let err = client
        .generate(&free_text_query("hello"))
        .await
        .expect_err("fails fast");

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(mock.request_count().await, 0);
}

#[tokio::test]
async fn multipart_candidate_text_is_joined() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::multipart_response(&["Take ", "care."]))
        .await;

    let client = mock.client(1);
    let completion = client
        .generate(&free_text_query("hello"))
        .await
        .expect("settles");

    assert_eq!(completion.text, "Take care.");
}

#[tokio::test]
async fn grounding_attributions_become_sources() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::grounded_response(
        "grounded answer",
        &[
            ("https://example.org/a", "Site A"),
            ("https://example.org/b", "Site B"),
        ],
    ))
    .await;

    let client = mock.client(1);
    let completion = client
        .generate(&free_text_query("hello"))
        .await
        .expect("settles");

    assert_eq!(completion.sources.len(), 2);
    assert_eq!(completion.sources[0].uri, "https://example.org/a");
    assert_eq!(completion.sources[1].title, "Site B");
}

#[tokio::test]
async fn empty_completion_is_terminal() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::text_response("   \n  ")).await;

    let client = mock.client(5);
    let err = client
        .generate(&free_text_query("hello"))
        .await
        .expect_err("blank text is a failure");

    assert_eq!(err.kind(), ErrorKind::EmptyResponse);
    assert_eq!(mock.request_count().await, 1);
}
