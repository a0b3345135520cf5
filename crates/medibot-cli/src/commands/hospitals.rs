//! Hospitals command - list hospitals nearest to a position.
//!
//! Works entirely offline against the built-in roster; no API key needed.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use medibot_assist::{HospitalLocator, NearbyHospital};

use crate::output;

/// Arguments for the hospitals command.
#[derive(Args, Debug)]
pub struct HospitalsArgs {
    /// Latitude of your position, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of your position, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Show at most this many hospitals
    #[arg(short = 'n', long, default_value_t = 5)]
    pub limit: usize,
}

/// One table row per hospital.
#[derive(Tabled)]
struct HospitalRow {
    #[tabled(rename = "Hospital")]
    name: String,
    #[tabled(rename = "Distance (mi)")]
    distance: f64,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Phone")]
    phone: String,
}

impl From<&NearbyHospital> for HospitalRow {
    fn from(nearby: &NearbyHospital) -> Self {
        Self {
            name: nearby.hospital.name.clone(),
            distance: nearby.distance_miles,
            address: nearby.hospital.address.clone(),
            phone: nearby.hospital.phone.clone(),
        }
    }
}

/// Execute the hospitals command.
pub fn execute(args: HospitalsArgs, json: bool) -> Result<()> {
    let locator = HospitalLocator::default();
    let mut nearest = locator.nearest(args.lat, args.lng);
    nearest.truncate(args.limit);

    if json {
        return output::json(&nearest);
    }

    let rows: Vec<HospitalRow> = nearest.iter().map(HospitalRow::from).collect();
    output::table(&rows);
    Ok(())
}
