//! Doctors command - search for doctors by specialty and location.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use medibot_assist::{user_message, DoctorSearch};
use medibot_core::{Doctor, Error};
use medibot_gateway::Client;

use crate::output;

/// Arguments for the doctors command.
#[derive(Args, Debug)]
pub struct DoctorsArgs {
    /// Doctor specialty, e.g. "Cardiologist"
    #[arg(short, long)]
    pub specialty: String,

    /// Location to search near, e.g. "Delhi"
    #[arg(short, long)]
    pub location: String,
}

/// Search results for JSON output.
#[derive(Debug, Serialize)]
struct SearchOutput {
    doctors: Vec<Doctor>,
    sources: Vec<medibot_core::SourceLink>,
}

/// One table row per doctor.
#[derive(Tabled)]
struct DoctorRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&Doctor> for DoctorRow {
    fn from(doctor: &Doctor) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        Self {
            name: field(&doctor.name),
            address: field(&doctor.address),
            rating: field(&doctor.rating),
            phone: field(&doctor.phone),
        }
    }
}

/// Execute the doctors command.
pub async fn execute(args: DoctorsArgs, client: Client, json: bool) -> Result<()> {
    let search = DoctorSearch::new(client);

    let results = match search.search(&args.specialty, &args.location).await {
        Ok(results) => results,
        // The model sometimes answers in prose instead of JSON; show the
        // text rather than nothing.
        Err(Error::Malformed { ref raw, .. }) if !raw.trim().is_empty() => {
            output::warning("The response was not structured; showing it as-is.");
            println!("{}", raw.trim());
            return Ok(());
        }
        Err(err) => return Err(anyhow::anyhow!(user_message(&err))),
    };

    if json {
        return output::json(&SearchOutput {
            doctors: results.doctors,
            sources: results.sources,
        });
    }

    if results.is_empty() {
        output::info(&format!(
            "No {} found near {}. Try a broader location.",
            args.specialty, args.location
        ));
        return Ok(());
    }

    let rows: Vec<DoctorRow> = results.doctors.iter().map(DoctorRow::from).collect();
    output::table(&rows);
    output::sources(&results.sources);
    Ok(())
}
