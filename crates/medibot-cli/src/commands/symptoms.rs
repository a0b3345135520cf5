//! Symptoms command - analyze a symptom description.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use medibot_assist::{user_message, SymptomAnalyzer};
use medibot_core::Section;
use medibot_gateway::Client;

use crate::output;

/// Arguments for the symptoms command.
#[derive(Args, Debug)]
pub struct SymptomsArgs {
    /// Symptom description (at least 10 characters)
    pub description: String,
}

/// Symptom report for JSON output.
#[derive(Debug, Serialize)]
struct ReportOutput {
    sections: Vec<Section>,
    specialist: Option<String>,
    sources: Vec<medibot_core::SourceLink>,
}

/// Execute the symptoms command.
pub async fn execute(args: SymptomsArgs, client: Client, json: bool) -> Result<()> {
    let analyzer = SymptomAnalyzer::new(client);

    let report = match analyzer.analyze(&args.description).await {
        Ok(report) => report,
        Err(err) => return Err(anyhow::anyhow!(user_message(&err))),
    };

    if json {
        return output::json(&ReportOutput {
            sections: report.sections,
            specialist: report.specialist,
            sources: report.sources,
        });
    }

    for section in &report.sections {
        if section.heading.is_empty() {
            println!("{}", section.body);
        } else {
            output::section(&section.heading);
            println!("{}", section.body);
        }
    }

    if let Some(ref specialist) = report.specialist {
        println!();
        output::success(&format!("Recommended specialist: {specialist}"));
        output::info(&format!(
            "Run `medibot doctors --specialty \"{specialist}\" --location <city>` to find one."
        ));
    }

    output::sources(&report.sources);
    Ok(())
}
