//! Appointment book over the storage port.
//!
//! Plain CRUD on a JSON list; intentionally no real scheduling.

use crate::storage::{keys, Namespace};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appointment lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked and upcoming.
    Scheduled,
    /// Cancelled by the user.
    Cancelled,
}

/// One booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Stable identifier.
    pub id: Uuid,
    /// Doctor the appointment is with.
    pub doctor: String,
    /// Doctor's specialty.
    pub specialty: String,
    /// When the appointment takes place.
    pub at: DateTime<Utc>,
    /// Lifecycle state.
    pub status: AppointmentStatus,
}

/// Appointment CRUD over a storage namespace.
#[derive(Debug, Clone)]
pub struct AppointmentBook {
    store: Namespace,
}

impl AppointmentBook {
    /// Create a book over a storage namespace.
    pub fn new(store: Namespace) -> Self {
        Self { store }
    }

    /// Book a new appointment.
    pub fn book(
        &self,
        doctor: impl Into<String>,
        specialty: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Appointment {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            doctor: doctor.into(),
            specialty: specialty.into(),
            at,
            status: AppointmentStatus::Scheduled,
        };

        let mut all = self.list();
        all.push(appointment.clone());
        self.store.put_json(keys::APPOINTMENTS, &all);
        appointment
    }

    /// All appointments, in booking order.
    pub fn list(&self) -> Vec<Appointment> {
        self.store.get_json(keys::APPOINTMENTS).unwrap_or_default()
    }

    /// Upcoming (scheduled) appointments only.
    pub fn upcoming(&self) -> Vec<Appointment> {
        self.list()
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .collect()
    }

    /// Cancel an appointment by id. Returns whether anything changed.
    pub fn cancel(&self, id: Uuid) -> bool {
        let mut all = self.list();
        let mut changed = false;
        for appointment in &mut all {
            if appointment.id == id && appointment.status == AppointmentStatus::Scheduled {
                appointment.status = AppointmentStatus::Cancelled;
                changed = true;
            }
        }
        if changed {
            self.store.put_json(keys::APPOINTMENTS, &all);
        }
        changed
    }
}
