//! Wire-format types for the `generateContent` API.
//!
//! Request body:
//! `{ contents: [{ parts: [{ text }] }], systemInstruction?, tools? }`
//!
//! Response body:
//! `{ candidates: [{ content: { parts: [{ text }] }, groundingMetadata? }] }`

use medibot_core::{Query, SourceLink};
use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

impl GenerateRequest {
    /// Build the wire request for a query.
    pub fn from_query(query: &Query) -> Self {
        Self {
            contents: vec![Content::text(&query.prompt)],
            system_instruction: query
                .system_instruction
                .as_deref()
                .map(Content::text),
            tools: query.web_search.then(|| vec![Tool::google_search()]),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

impl Tool {
    fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

// Serializes to `{}`, matching the capability-flag shape the API expects.
#[derive(Debug, Serialize)]
struct GoogleSearch {}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Whether the endpoint produced any candidate at all.
    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Text of the first candidate, all parts joined.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// Grounding source links of the first candidate, in response order.
    pub fn sources(&self) -> Vec<SourceLink> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_attributions
                    .iter()
                    .filter_map(|attribution| attribution.web.as_ref())
                    .filter(|web| !web.uri.is_empty() && !web.title.is_empty())
                    .map(|web| SourceLink {
                        uri: web.uri.clone(),
                        title: web.title.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_attributions: Vec<GroundingAttribution>,
}

#[derive(Debug, Deserialize)]
struct GroundingAttribution {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
}

/// Error envelope the API wraps failures in.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

impl ErrorEnvelope {
    /// Best-effort error message for an HTTP failure body. Falls back to
    /// the status code when the envelope cannot be parsed.
    pub fn message_for(status: u16, body: &str) -> String {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|envelope| !envelope.error.message.is_empty())
            .map_or_else(|| format!("HTTP {status}"), |envelope| envelope.error.message)
    }
}
