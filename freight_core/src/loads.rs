//! # Saved Loads
//!
//! `LoadCollection` is the session's multi-load list: an ordered sequence of
//! named calculation snapshots. Insertion order is both display order and
//! report order. Records are immutable once added; the only mutations are
//! add, remove and clear.
//!
//! ## Structure
//!
//! ```text
//! LoadCollection
//! ├── records: Vec<SavedLoadRecord> (insertion order)
//! └── next_id: u64 (monotonic, never reused)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use freight_core::loads::LoadCollection;
//! use freight_core::measurement::MeasurementInputs;
//!
//! let mut loads = LoadCollection::new();
//! let id = loads
//!     .add_computed("", MeasurementInputs::imperial("24", "18", "12", "45"))
//!     .map(|record| record.id)
//!     .unwrap();
//!
//! assert_eq!(loads.get(id).unwrap().name, "Load 1");
//! loads.remove(id);
//! assert!(loads.is_empty());
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::density::{compute, CalculationResult};
use crate::measurement::MeasurementInputs;

/// Identifier of a saved load, unique within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadId(pub u64);

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named snapshot of one completed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLoadRecord {
    pub id: LoadId,
    pub name: String,
    /// Inputs exactly as typed when the load was saved
    pub inputs: MeasurementInputs,
    pub result: CalculationResult,
    pub created_at: DateTime<Utc>,
}

/// Ordered, session-scoped collection of saved loads.
#[derive(Debug, Clone, Default)]
pub struct LoadCollection {
    records: Vec<SavedLoadRecord>,
    next_id: u64,
}

impl LoadCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// A blank `name` becomes "Load N" where N is the new record's position.
    pub fn add(
        &mut self,
        name: &str,
        inputs: MeasurementInputs,
        result: CalculationResult,
    ) -> &SavedLoadRecord {
        let name = match name.trim() {
            "" => format!("Load {}", self.records.len() + 1),
            trimmed => trimmed.to_string(),
        };

        self.next_id += 1;
        let record = SavedLoadRecord {
            id: LoadId(self.next_id),
            name,
            inputs,
            result,
            created_at: Utc::now(),
        };
        tracing::debug!(id = %record.id, name = %record.name, "saved load");

        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Compute the inputs and append the result.
    ///
    /// Returns `None` without touching the collection when the inputs are
    /// incomplete.
    pub fn add_computed(&mut self, name: &str, inputs: MeasurementInputs) -> Option<&SavedLoadRecord> {
        let result = compute(&inputs)?;
        Some(self.add(name, inputs, result))
    }

    /// Remove a record by id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: LoadId) -> Option<SavedLoadRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Remove every record. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn get(&self, id: LoadId) -> Option<&SavedLoadRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[SavedLoadRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedLoadRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a LoadCollection {
    type Item = &'a SavedLoadRecord;
    type IntoIter = std::slice::Iter<'a, SavedLoadRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
