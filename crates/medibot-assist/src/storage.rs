//! Storage port: namespace-scoped key-value JSON persistence.
//!
//! Replaces the browser-local storage the portal originally leaned on.
//! Adapters receive a [`Namespace`] over some [`StoragePort`]; the
//! in-memory implementation is the default and lives for the process.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Key-value storage seam injected into feature adapters.
pub trait StoragePort: Send + Sync {
    /// Read the value stored under a key.
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value under a key, replacing any previous value.
    fn put(&self, key: &str, value: String);
    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str);
}

/// In-memory storage, suitable for a single process run and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// A prefix-scoped view over a storage port, with typed JSON helpers.
#[derive(Clone)]
pub struct Namespace {
    port: Arc<dyn StoragePort>,
    prefix: String,
}

impl Namespace {
    /// Scope a storage port under a prefix, e.g. `"medibot"`.
    pub fn new(port: Arc<dyn StoragePort>, prefix: impl Into<String>) -> Self {
        Self {
            port,
            prefix: prefix.into(),
        }
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}:{key}", self.prefix)
    }

    /// Read a raw value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.port.get(&self.scoped(key))
    }

    /// Store a raw value.
    pub fn put(&self, key: &str, value: String) {
        self.port.put(&self.scoped(key), value);
    }

    /// Remove a key.
    pub fn remove(&self, key: &str) {
        self.port.remove(&self.scoped(key));
    }

    /// Read and deserialize a JSON value. Unreadable blobs are treated as
    /// absent rather than surfaced; storage is best-effort state, not a
    /// source of truth.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Serialize and store a JSON value.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.put(key, raw);
        }
    }
}

impl std::fmt::Debug for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Namespace")
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// Well-known storage keys, one per feature area.
pub mod keys {
    /// User profile blob.
    pub const PROFILE: &str = "profile";
    /// Appointment list.
    pub const APPOINTMENTS: &str = "appointments";
    /// Chat history.
    pub const CHAT_HISTORY: &str = "chat-history";
}

/// Basic user profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Namespace {
    /// Load the stored user profile, if any.
    pub fn profile(&self) -> Option<UserProfile> {
        self.get_json(keys::PROFILE)
    }

    /// Store the user profile.
    pub fn save_profile(&self, profile: &UserProfile) {
        self.put_json(keys::PROFILE, profile);
    }
}
