//! Emergency hospital locator.
//!
//! Sorts a fixed hospital roster by great-circle distance from the
//! user's position. Entirely offline; no gateway involvement.

use serde::{Deserialize, Serialize};

/// Earth's radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A hospital in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    /// Hospital name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Emergency contact number.
    pub phone: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// A hospital with its distance from the queried position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyHospital {
    /// The hospital.
    #[serde(flatten)]
    pub hospital: Hospital,
    /// Distance in miles, rounded to one decimal.
    pub distance_miles: f64,
}

/// Great-circle distance between two coordinates, in miles.
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Locator over a hospital roster.
#[derive(Debug, Clone)]
pub struct HospitalLocator {
    hospitals: Vec<Hospital>,
}

impl HospitalLocator {
    /// Create a locator over a custom roster.
    pub fn new(hospitals: Vec<Hospital>) -> Self {
        Self { hospitals }
    }

    /// The roster, unsorted.
    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    /// Hospitals sorted ascending by distance from a position, distances
    /// rounded to one decimal.
    pub fn nearest(&self, lat: f64, lng: f64) -> Vec<NearbyHospital> {
        let mut nearby: Vec<NearbyHospital> = self
            .hospitals
            .iter()
            .cloned()
            .map(|hospital| {
                let distance = haversine_miles(lat, lng, hospital.lat, hospital.lng);
                NearbyHospital {
                    hospital,
                    distance_miles: (distance * 10.0).round() / 10.0,
                }
            })
            .collect();
        nearby.sort_by(|a, b| {
            a.distance_miles
                .partial_cmp(&b.distance_miles)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        nearby
    }
}

impl Default for HospitalLocator {
    /// Demo roster of Delhi-area emergency hospitals.
    fn default() -> Self {
        Self::new(vec![
            Hospital {
                name: "AIIMS Trauma Center".to_string(),
                address: "Raj Nagar, New Delhi".to_string(),
                phone: "011-2673-1000".to_string(),
                lat: 28.5672,
                lng: 77.2100,
            },
            Hospital {
                name: "Safdarjung Hospital Emergency".to_string(),
                address: "Ansari Nagar West, New Delhi".to_string(),
                phone: "011-2673-0000".to_string(),
                lat: 28.5686,
                lng: 77.2060,
            },
            Hospital {
                name: "Apollo Hospital".to_string(),
                address: "Mathura Road, Sarita Vihar, New Delhi".to_string(),
                phone: "011-7179-1090".to_string(),
                lat: 28.5417,
                lng: 77.2831,
            },
            Hospital {
                name: "Fortis Escorts Heart Institute".to_string(),
                address: "Okhla Road, New Delhi".to_string(),
                phone: "011-4713-5000".to_string(),
                lat: 28.5590,
                lng: 77.2740,
            },
            Hospital {
                name: "Max Super Speciality Hospital".to_string(),
                address: "Press Enclave Road, Saket, New Delhi".to_string(),
                phone: "011-2651-5050".to_string(),
                lat: 28.5280,
                lng: 77.2150,
            },
        ])
    }
}
