//! Test fixtures and sample data for integration tests

use serde_json::{json, Value};

/// A `generateContent` response carrying a single text part.
pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
}

/// A response whose text is split across multiple parts.
pub fn multipart_response(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "candidates": [{
            "content": { "parts": parts }
        }]
    })
}

/// A web-grounded response with attribution links.
pub fn grounded_response(text: &str, sources: &[(&str, &str)]) -> Value {
    let attributions: Vec<Value> = sources
        .iter()
        .map(|(uri, title)| json!({ "web": { "uri": uri, "title": title } }))
        .collect();
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] },
            "groundingMetadata": { "groundingAttributions": attributions }
        }]
    })
}

/// The standard error envelope the API wraps failures in.
pub fn error_body(code: u16, message: &str) -> Value {
    json!({
        "error": { "code": code, "message": message, "status": "INVALID_ARGUMENT" }
    })
}

/// A doctor-search completion: fenced JSON array, the way the model
/// typically answers despite being told to emit bare JSON.
pub fn fenced_doctors_json() -> String {
    concat!(
        "```json\n",
        "[\n",
        "  {\"Name\": \"Dr. Asha Verma\", \"Address\": \"12 Ring Road, Delhi\", ",
        "\"Rating\": \"4.8/5\", \"Phone\": \"+91-11-5550-0101\"},\n",
        "  {\"Name\": \"Dr. Rohan Mehta\", \"Address\": \"45 Lake View, Delhi\", ",
        "\"Rating\": \"4.6/5\", \"Phone\": \"+91-11-5550-0202\"}\n",
        "]\n",
        "```"
    )
    .to_string()
}

/// A symptom-analysis completion in the sectioned markdown format the
/// system prompt asks for.
pub fn symptom_report_markdown() -> String {
    concat!(
        "## Possible Conditions\n",
        "Chest tightness with exertion can indicate angina.\n",
        "## Precautions\n",
        "Avoid strenuous activity until evaluated.\n",
        "## Recommended Specialist Type\n",
        "**Cardiologist**\n",
        "## When to Seek Emergency Care\n",
        "Call emergency services for pain lasting more than a few minutes.\n"
    )
    .to_string()
}
