//! Response parsing: raw completion text into the shape a caller expects.
//!
//! The model output is noisy in predictable ways: JSON answers arrive
//! wrapped in markdown fences, and "arrays" occasionally come back as a
//! single object. Parsing tolerates that noise instead of failing on it.
//! Genuine parse failures return [`Error::Malformed`] with the raw text
//! preserved, letting the caller show it as a degraded fallback.

use crate::error::{Error, GatewayResult};
use crate::query::Expectation;
use serde::{Deserialize, Serialize};

/// One doctor entry from a JSON-array completion.
///
/// The model is prompted to emit capitalized keys (`Name`, `Address`,
/// `Rating`, `Phone`); lowercase variants are accepted as well. Fields the
/// model omits are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Doctor or practice name.
    #[serde(rename = "Name", alias = "name", default)]
    pub name: Option<String>,
    /// Street address.
    #[serde(rename = "Address", alias = "address", default)]
    pub address: Option<String>,
    /// Rating as free text, e.g. `"4.5/5"` or `"Excellent"`.
    #[serde(rename = "Rating", alias = "rating", default)]
    pub rating: Option<String>,
    /// Contact phone number.
    #[serde(rename = "Phone", alias = "phone", default)]
    pub phone: Option<String>,
}

/// One markdown section: heading text and the body under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text with the `#` markers stripped. Empty for text that
    /// appeared before the first heading.
    pub heading: String,
    /// Body text, trimmed, with inline markdown (`**bold**`, list markers)
    /// left for the renderer.
    pub body: String,
}

/// Parsed completion payload, tagged to match the query's [`Expectation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedPayload {
    /// Free text, passed through untouched.
    Text(String),
    /// Doctor entries from a JSON array (or a single wrapped object).
    Doctors(Vec<Doctor>),
    /// Ordered markdown sections.
    Sections(Vec<Section>),
}

/// Parse raw completion text according to the expected shape.
///
/// # Errors
/// Returns [`Error::Malformed`] when JSON-array parsing fails; the raw
/// text is preserved inside the error.
pub fn parse(raw: &str, expects: Expectation) -> GatewayResult<ParsedPayload> {
    match expects {
        Expectation::FreeText => Ok(ParsedPayload::Text(raw.to_string())),
        Expectation::JsonArray => parse_doctors(raw).map(ParsedPayload::Doctors),
        Expectation::MarkdownSections => Ok(ParsedPayload::Sections(split_sections(raw))),
    }
}

/// Parse a JSON array of doctors, tolerating fence markers and a bare
/// object in place of an array.
fn parse_doctors(raw: &str) -> GatewayResult<Vec<Doctor>> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(cleaned)
        .map_err(|e| Error::malformed(format!("Invalid JSON: {e}"), raw))?;

    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map_err(|e| Error::malformed(format!("Unexpected array contents: {e}"), raw)),
        // The UI always enumerates entries, so a lone object becomes a
        // one-element sequence rather than a failure.
        serde_json::Value::Object(_) => {
            let doctor: Doctor = serde_json::from_value(value)
                .map_err(|e| Error::malformed(format!("Unexpected object shape: {e}"), raw))?;
            Ok(vec![doctor])
        }
        other => Err(Error::malformed(
            format!("Expected a JSON array, got {}", json_type_name(&other)),
            raw,
        )),
    }
}

/// Strip markdown code-fence markers (```` ```json ```` and ```` ``` ````)
/// from around a JSON answer.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .trim()
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Split markdown text into ordered sections on `#`/`##` heading lines.
///
/// Text before the first heading becomes a section with an empty heading.
/// Bold and list markers inside bodies are left as-is.
pub fn split_sections(raw: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut heading = String::new();
    let mut body_lines: Vec<&str> = Vec::new();

    let mut flush = |heading: &mut String, body_lines: &mut Vec<&str>, keep_empty: bool| {
        let body = body_lines.join("\n").trim().to_string();
        if keep_empty || !body.is_empty() {
            sections.push(Section {
                heading: std::mem::take(heading),
                body,
            });
        } else {
            heading.clear();
        }
        body_lines.clear();
    };

    for line in raw.lines() {
        let trimmed = line.trim_start();
        if let Some(text) = heading_text(trimmed) {
            // Preamble (empty heading) is only kept when it has content;
            // real headings are kept even with empty bodies to preserve
            // document order.
            let keep_empty = !heading.is_empty();
            flush(&mut heading, &mut body_lines, keep_empty);
            heading = text.to_string();
        } else {
            body_lines.push(line);
        }
    }
    let keep_empty = !heading.is_empty();
    flush(&mut heading, &mut body_lines, keep_empty);

    sections
}

/// Heading text of a `#`/`##` markdown heading line, if it is one.
fn heading_text(line: &str) -> Option<&str> {
    let stripped = line.strip_prefix('#')?;
    // Levels beyond ## are treated the same way.
    let stripped = stripped.trim_start_matches('#');
    Some(stripped.trim())
}

/// Look up a section body by heading, case-insensitively.
pub fn section_body<'a>(sections: &'a [Section], heading: &str) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| s.heading.eq_ignore_ascii_case(heading))
        .map(|s| s.body.as_str())
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_passthrough() {
        let payload = parse("hello **there**", Expectation::FreeText).unwrap();
        assert_eq!(payload, ParsedPayload::Text("hello **there**".to_string()));
    }

    #[test]
    fn test_fenced_json_array() {
        let raw = "```json\n[{\"Name\":\"A\"}]\n```";
        let payload = parse(raw, Expectation::JsonArray).unwrap();

        let ParsedPayload::Doctors(doctors) = payload else {
            panic!("expected doctors");
        };
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].name.as_deref(), Some("A"));
        assert!(doctors[0].address.is_none());
    }

    #[test]
    fn test_bare_fence_markers() {
        let raw = "```\n[{\"Name\":\"Dr. Rao\",\"Phone\":\"011-555\"}]\n```";
        let ParsedPayload::Doctors(doctors) = parse(raw, Expectation::JsonArray).unwrap() else {
            panic!("expected doctors");
        };
        assert_eq!(doctors[0].phone.as_deref(), Some("011-555"));
    }

    #[test]
    fn test_object_wrapped_into_sequence() {
        let raw = r#"{"Name":"Dr. Singh","Address":"12 Ring Rd","Rating":"4.5/5","Phone":"N/A"}"#;
        let ParsedPayload::Doctors(doctors) = parse(raw, Expectation::JsonArray).unwrap() else {
            panic!("expected doctors");
        };
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].rating.as_deref(), Some("4.5/5"));
    }

    #[test]
    fn test_empty_array_is_not_a_failure() {
        let ParsedPayload::Doctors(doctors) = parse("[]", Expectation::JsonArray).unwrap() else {
            panic!("expected doctors");
        };
        assert!(doctors.is_empty());
    }

    #[test]
    fn test_lowercase_keys_accepted() {
        let raw = r#"[{"name":"Dr. Iyer","address":"MG Road"}]"#;
        let ParsedPayload::Doctors(doctors) = parse(raw, Expectation::JsonArray).unwrap() else {
            panic!("expected doctors");
        };
        assert_eq!(doctors[0].name.as_deref(), Some("Dr. Iyer"));
        assert_eq!(doctors[0].address.as_deref(), Some("MG Road"));
    }

    #[test]
    fn test_invalid_json_is_malformed_with_raw() {
        let err = parse("sorry, I cannot help", Expectation::JsonArray).unwrap_err();
        assert_eq!(err.raw_text(), Some("sorry, I cannot help"));
    }

    #[test]
    fn test_scalar_json_is_malformed() {
        let err = parse("42", Expectation::JsonArray).unwrap_err();
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn test_sections_basic() {
        let raw = "## Recommended Specialist Type\nCardiologist\n## Next";
        let ParsedPayload::Sections(sections) = parse(raw, Expectation::MarkdownSections).unwrap()
        else {
            panic!("expected sections");
        };

        assert_eq!(
            section_body(&sections, "Recommended Specialist Type"),
            Some("Cardiologist")
        );
        assert_eq!(sections.last().unwrap().heading, "Next");
    }

    #[test]
    fn test_sections_preserve_order_and_preamble() {
        let raw = "Intro line.\n# Summary\nFeels like a cold.\n## Care Advice\n* Rest\n* Fluids";
        let sections = split_sections(raw);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].heading, "");
        assert_eq!(sections[0].body, "Intro line.");
        assert_eq!(sections[1].heading, "Summary");
        assert_eq!(sections[2].heading, "Care Advice");
        // Inline list markup survives for the renderer.
        assert!(sections[2].body.contains("* Rest"));
    }

    #[test]
    fn test_section_lookup_case_insensitive() {
        let sections = split_sections("## Care Advice\nRest up.");
        assert_eq!(section_body(&sections, "care advice"), Some("Rest up."));
        assert!(section_body(&sections, "missing").is_none());
    }

    #[test]
    fn test_no_headings_yields_single_preamble() {
        let sections = split_sections("just prose\nover two lines");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "");
    }
}
