//! # Medibot Assist
//!
//! Feature adapters for the medical assistant. Each adapter composes the
//! gateway client and the response parser: build a query, execute it,
//! parse the completion, hand the typed outcome to the caller. Rendering
//! belongs to the caller; failures map to user-facing copy via
//! [`messages::user_message`].
//!
//! Persistence goes through the [`storage::StoragePort`] abstraction;
//! the gateway core never touches it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod appointments;
pub mod chat;
pub mod doctors;
pub mod locator;
pub mod messages;
pub mod storage;
pub mod symptom;

pub use appointments::{Appointment, AppointmentBook, AppointmentStatus};
pub use chat::{ChatAssistant, ChatReply, ChatRole, ChatTurn};
pub use doctors::{DoctorSearch, DoctorSearchResults};
pub use locator::{haversine_miles, Hospital, HospitalLocator, NearbyHospital};
pub use messages::user_message;
pub use storage::{MemoryStore, Namespace, StoragePort, UserProfile};
pub use symptom::{SymptomAnalyzer, SymptomReport};
