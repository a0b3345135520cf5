//! Symptom analyzer adapter.
//!
//! Asks the model for a structured markdown report and extracts the
//! recommended specialist type so a doctor search can follow up on it.

use medibot_core::{section_body, split_sections, Error};
use medibot_core::{Expectation, GatewayResult, Query, Section, SourceLink};
use medibot_gateway::Client;
use tracing::debug;

/// Minimum length of a usable symptom description.
pub const MIN_SYMPTOM_LEN: usize = 10;

/// Heading under which the model reports the specialist to see.
const SPECIALIST_HEADING: &str = "Recommended Specialist Type";

const SYSTEM_PROMPT: &str = "You are an informational AI symptom checker. You are not a doctor \
and must say so. Given a symptom description, respond in markdown with these sections: \
'## Possible Causes' (2-3 plain-language possibilities), '## Care Advice' (self-care steps and \
warning signs that need urgent attention), and '## Recommended Specialist Type' (a single \
specialist name, e.g. Cardiologist, on its own line). Keep the tone calm and factual.";

/// Structured outcome of a symptom analysis.
#[derive(Debug, Clone)]
pub struct SymptomReport {
    /// Report sections in document order.
    pub sections: Vec<Section>,
    /// Specialist extracted from the report, when present.
    pub specialist: Option<String>,
    /// Grounding sources for the report.
    pub sources: Vec<SourceLink>,
}

/// Adapter running symptom descriptions through the gateway.
#[derive(Debug, Clone)]
pub struct SymptomAnalyzer {
    client: Client,
}

impl SymptomAnalyzer {
    /// Create an analyzer over a gateway client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Analyze a symptom description.
    ///
    /// # Errors
    /// Rejects descriptions shorter than [`MIN_SYMPTOM_LEN`] before any
    /// network call; otherwise propagates gateway and parse errors.
    pub async fn analyze(&self, symptoms: &str) -> GatewayResult<SymptomReport> {
        let symptoms = symptoms.trim();
        if symptoms.len() < MIN_SYMPTOM_LEN {
            return Err(Error::invalid_request(format!(
                "Please describe your symptoms (at least {MIN_SYMPTOM_LEN} characters)"
            )));
        }

        let query = Query::builder()
            .prompt(format!("My symptoms are: {symptoms}"))
            .system_instruction(SYSTEM_PROMPT)
            .expects(Expectation::MarkdownSections)
            .web_search(true)
            .build()?;

        let completion = self.client.generate(&query).await?;
        let sections = split_sections(&completion.text);

        let specialist = extract_specialist(&sections);
        debug!(specialist = ?specialist, sections = sections.len(), "Symptom analysis parsed");

        Ok(SymptomReport {
            sections,
            specialist,
            sources: completion.sources,
        })
    }
}

/// First non-empty line of the specialist section, with bold/list `*`
/// markers stripped.
fn extract_specialist(sections: &[Section]) -> Option<String> {
    let body = section_body(sections, SPECIALIST_HEADING)?;
    body.lines()
        .map(|line| line.replace('*', "").trim().to_string())
        .find(|line| !line.is_empty())
}
