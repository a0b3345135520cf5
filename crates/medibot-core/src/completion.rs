//! Successful gateway outcome: raw completion text plus grounding sources.

use serde::{Deserialize, Serialize};

/// A source link substantiating a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    /// Where the claim came from.
    pub uri: String,
    /// Human-readable title for the link.
    pub title: String,
}

/// A settled, successful gateway call.
///
/// Invariant: `text` is non-empty after trimming; the gateway client
/// normalizes an empty body to [`crate::Error::EmptyResponse`] instead of
/// ever constructing one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Raw completion text from the first candidate.
    pub text: String,
    /// Grounding/citation metadata, in response order. Empty when the
    /// endpoint returned none.
    #[serde(default)]
    pub sources: Vec<SourceLink>,
}

impl Completion {
    /// Create a completion with no grounding sources.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }

    /// Attach grounding sources.
    pub fn with_sources(mut self, sources: Vec<SourceLink>) -> Self {
        self.sources = sources;
        self
    }
}
