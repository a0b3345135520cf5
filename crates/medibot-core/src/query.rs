//! Query type built by feature adapters and executed by the gateway client.

use crate::error::{Error, GatewayResult};
use serde::{Deserialize, Serialize};

/// The shape a caller expects the completion text to take.
///
/// The gateway itself always returns raw text; the parser uses this tag to
/// produce a [`crate::ParsedPayload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Expectation {
    /// Plain prose, passed through untouched.
    #[default]
    FreeText,
    /// A JSON array (possibly fenced in a markdown code block).
    JsonArray,
    /// A markdown document split on `#`/`##` headings.
    MarkdownSections,
}

/// One logical query against the generative endpoint.
///
/// Immutable; constructed per call via [`Query::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The user-facing prompt text.
    pub prompt: String,
    /// Optional system instruction steering the model.
    pub system_instruction: Option<String>,
    /// Expected shape of the completion text.
    pub expects: Expectation,
    /// Whether to request web-search grounding for the answer.
    pub web_search: bool,
}

impl Query {
    /// Start building a query.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }
}

/// Builder for [`Query`].
#[derive(Debug, Default)]
pub struct QueryBuilder {
    prompt: Option<String>,
    system_instruction: Option<String>,
    expects: Expectation,
    web_search: bool,
}

impl QueryBuilder {
    /// Set the prompt text.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Set the system instruction.
    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Set the expected completion shape.
    pub fn expects(mut self, expects: Expectation) -> Self {
        self.expects = expects;
        self
    }

    /// Request web-search grounding.
    pub fn web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    /// Build the query.
    ///
    /// # Errors
    /// Returns a client error when the prompt is missing or blank.
    pub fn build(self) -> GatewayResult<Query> {
        let prompt = self
            .prompt
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| Error::invalid_request("Query prompt must not be empty"))?;

        Ok(Query {
            prompt,
            system_instruction: self.system_instruction,
            expects: self.expects,
            web_search: self.web_search,
        })
    }
}
