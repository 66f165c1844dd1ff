//! # Draft Persistence
//!
//! The input draft is saved to a namespaced key-value store on every change
//! and read back once at session start. Persistence is best-effort:
//!
//! - [`DraftStore::load`] never fails. A missing key, an unreadable store or
//!   a malformed payload all produce the empty default draft.
//! - [`DraftStore::save`] logs a warning and returns the error on failure.
//!   Callers are free to ignore it; nothing is retried or queued.
//!
//! Only the measurement inputs are persisted. Results are recomputed from
//! them and saved loads live for the session only.
//!
//! ## Example
//!
//! ```rust
//! use freight_core::measurement::MeasurementInputs;
//! use freight_core::persistence::{DraftStore, MemoryStore};
//!
//! let mut drafts = DraftStore::new(MemoryStore::new());
//! assert_eq!(drafts.load(), MeasurementInputs::default());
//!
//! let inputs = MeasurementInputs::imperial("24", "18", "12", "45");
//! drafts.save(&inputs).ok();
//! assert_eq!(drafts.load(), inputs);
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::errors::{FreightError, FreightResult};
use crate::measurement::MeasurementInputs;

/// Storage key the draft is written under
pub const DRAFT_KEY: &str = "freightClassPro";

/// A string key-value store with no transactional guarantees.
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> FreightResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> FreightResult<()>;
}

/// In-memory store, used in tests and on targets without a filesystem.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, as a full quota would
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Store a raw value directly, bypassing the read-only switch
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FreightResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FreightResult<()> {
        if self.read_only {
            return Err(FreightError::storage_error("write", key, "store is read-only"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the input draft under [`DRAFT_KEY`].
#[derive(Debug)]
pub struct DraftStore<S> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        DraftStore { store }
    }

    /// Read the saved draft, falling back to the empty default.
    pub fn load(&self) -> MeasurementInputs {
        match self.store.get(DRAFT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => draft_from_value(&value),
                Err(e) => {
                    tracing::warn!(key = DRAFT_KEY, error = %e, "ignoring malformed saved draft");
                    MeasurementInputs::default()
                }
            },
            Ok(None) => MeasurementInputs::default(),
            Err(e) => {
                tracing::warn!(key = DRAFT_KEY, error = %e, "could not read saved draft");
                MeasurementInputs::default()
            }
        }
    }

    /// Write the draft. Failures are logged and returned, never retried.
    pub fn save(&mut self, inputs: &MeasurementInputs) -> FreightResult<()> {
        let result = serde_json::to_string(inputs)
            .map_err(FreightError::from)
            .and_then(|json| self.store.set(DRAFT_KEY, &json));

        if let Err(e) = &result {
            tracing::warn!(
                key = DRAFT_KEY,
                error = %e,
                recoverable = e.is_recoverable(),
                "could not save draft"
            );
        }
        result
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// Build a draft from whatever JSON was stored, field by field.
///
/// Missing or mistyped fields take their defaults; a number stored where a
/// dimension string is expected is kept in its string form.
fn draft_from_value(value: &Value) -> MeasurementInputs {
    let text = |name: &str| match value.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    let flag = |name: &str| value.get(name).and_then(Value::as_bool).unwrap_or(false);

    MeasurementInputs {
        length: text("length"),
        width: text("width"),
        height: text("height"),
        weight: text("weight"),
        use_metric: flag("useMetric"),
        palletized: flag("palletized"),
    }
}
