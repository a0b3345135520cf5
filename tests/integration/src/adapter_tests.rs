//! Feature adapters end to end against the mocked endpoint.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use medibot_assist::{
    ChatAssistant, ChatRole, DoctorSearch, MemoryStore, Namespace, SymptomAnalyzer,
};
use medibot_core::{Error, ErrorKind};

use crate::fixtures;
use crate::mock_gemini::MockGemini;

fn namespace() -> Namespace {
    Namespace::new(Arc::new(MemoryStore::new()), "test-user")
}

#[tokio::test]
async fn symptom_flow_extracts_the_specialist() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::text_response(&fixtures::symptom_report_markdown()))
        .await;

    let analyzer = SymptomAnalyzer::new(mock.client(1));
    let report = analyzer
        .analyze("chest tightness when climbing stairs")
        .await
        .expect("analysis settles");

    assert_eq!(report.specialist.as_deref(), Some("Cardiologist"));
    let headings: Vec<&str> = report
        .sections
        .iter()
        .map(|section| section.heading.as_str())
        .collect();
    assert!(headings.contains(&"Possible Conditions"));
    assert!(headings.contains(&"When to Seek Emergency Care"));
}

#[tokio::test]
async fn short_symptom_descriptions_never_reach_the_network() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::text_response("unused")).await;

    let analyzer = SymptomAnalyzer::new(mock.client(1));
    let err = analyzer.analyze("ow").await.expect_err("too short");

    assert_eq!(err.kind(), ErrorKind::ClientError);
    assert_eq!(mock.request_count().await, 0);
}

#[tokio::test]
async fn doctor_search_parses_fenced_json() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::grounded_response(
        &fixtures::fenced_doctors_json(),
        &[("https://example.org/directory", "Doctor Directory")],
    ))
    .await;

    let search = DoctorSearch::new(mock.client(1));
    let results = search
        .search("Cardiologist", "Delhi")
        .await
        .expect("search settles");

    assert_eq!(results.doctors.len(), 2);
    assert_eq!(results.doctors[0].name.as_deref(), Some("Dr. Asha Verma"));
    assert_eq!(results.doctors[1].rating.as_deref(), Some("4.6/5"));
    assert_eq!(results.sources.len(), 1);
}

#[tokio::test]
async fn doctor_search_empty_array_means_no_results() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::text_response("[]")).await;

    let search = DoctorSearch::new(mock.client(1));
    let results = search
        .search("Cardiologist", "Atlantis")
        .await
        .expect("empty array is a valid outcome");

    assert!(results.is_empty());
}

#[tokio::test]
async fn doctor_search_prose_keeps_raw_text_for_fallback() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::text_response(
        "I could not find structured listings, but Delhi has several cardiology clinics.",
    ))
    .await;

    let search = DoctorSearch::new(mock.client(1));
    let err = search
        .search("Cardiologist", "Delhi")
        .await
        .expect_err("prose is malformed for a JSON expectation");

    match err {
        Error::Malformed { raw, .. } => {
            assert!(raw.contains("cardiology clinics"));
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[tokio::test]
async fn chat_records_both_turns_on_success() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::text_response("Drink fluids and rest."))
        .await;

    let assistant = ChatAssistant::new(mock.client(1), namespace());
    let reply = assistant
        .send("What helps with a head cold?")
        .await
        .expect("chat settles");

    assert_eq!(reply.text, "Drink fluids and rest.");
    let history = assistant.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, ChatRole::User);
    assert_eq!(history[0].text, "What helps with a head cold?");
    assert_eq!(history[1].role, ChatRole::Assistant);
}

#[tokio::test]
async fn chat_failure_leaves_history_untouched() {
    let mock = MockGemini::start().await;
    mock.respond_status(500, fixtures::error_body(500, "internal")).await;

    let assistant = ChatAssistant::new(mock.client(2), namespace());
    assistant
        .send("hello?")
        .await
        .expect_err("server keeps failing");

    assert!(assistant.history().is_empty());
}

#[tokio::test]
async fn chat_history_survives_across_sends() {
    let mock = MockGemini::start().await;
    mock.respond_ok(fixtures::text_response("noted")).await;

    let assistant = ChatAssistant::new(mock.client(1), namespace());
    assistant.send("first message").await.expect("settles");
    assistant.send("second message").await.expect("settles");

    assert_eq!(assistant.history().len(), 4);

    assistant.clear_history();
    assert!(assistant.history().is_empty());
}
