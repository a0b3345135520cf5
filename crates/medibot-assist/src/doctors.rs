//! Doctor search adapter.
//!
//! Prompts the model for a bare JSON array of doctor entries and parses
//! it through the gateway's JSON-array mode. An empty array is a valid
//! "no results" outcome.

use medibot_core::{parse, Doctor, Error, Expectation, GatewayResult, ParsedPayload, Query, SourceLink};
use medibot_gateway::Client;
use tracing::debug;

const SYSTEM_PROMPT: &str = "You are a professional medical search assistant. Find the \
top-rated doctors in the specified specialty and location. You MUST return an array of 3-5 \
doctor objects in JSON format. Each object MUST contain the fields 'Name', 'Address', 'Rating' \
(as a string, e.g. \"4.5/5\" or \"Excellent\"), and 'Phone' (use 'N/A' when not found). DO NOT \
include any text, markdown, or explanation outside the JSON block. The response must be a \
single, valid JSON array of doctor objects.";

/// Outcome of a doctor search.
#[derive(Debug, Clone)]
pub struct DoctorSearchResults {
    /// Doctor entries, possibly empty.
    pub doctors: Vec<Doctor>,
    /// Grounding sources backing the entries.
    pub sources: Vec<SourceLink>,
}

impl DoctorSearchResults {
    /// Whether the search produced no entries.
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

/// Adapter searching for doctors by specialty and location.
#[derive(Debug, Clone)]
pub struct DoctorSearch {
    client: Client,
}

impl DoctorSearch {
    /// Create a search adapter over a gateway client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Search for doctors of a specialty near a location.
    ///
    /// # Errors
    /// Rejects blank inputs before any network call. A completion that is
    /// not valid JSON surfaces as [`Error::Malformed`] with the raw text
    /// preserved, so callers can fall back to showing it.
    pub async fn search(
        &self,
        specialty: &str,
        location: &str,
    ) -> GatewayResult<DoctorSearchResults> {
        let specialty = specialty.trim();
        let location = location.trim();
        if specialty.is_empty() || location.is_empty() {
            return Err(Error::invalid_request(
                "Please enter both a doctor specialty and a location",
            ));
        }

        let query = Query::builder()
            .prompt(format!("Find top-rated {specialty} doctors near {location}."))
            .system_instruction(SYSTEM_PROMPT)
            .expects(Expectation::JsonArray)
            .web_search(true)
            .build()?;

        let completion = self.client.generate(&query).await?;
        let doctors = match parse(&completion.text, query.expects)? {
            ParsedPayload::Doctors(doctors) => doctors,
            // JsonArray parsing only ever yields doctor entries.
            _ => Vec::new(),
        };

        debug!(count = doctors.len(), specialty, "Doctor search parsed");

        Ok(DoctorSearchResults {
            doctors,
            sources: completion.sources,
        })
    }
}
