//! # Quick Templates
//!
//! Preset dimensions and weights for common commodities. All template values
//! are in inches and pounds.

use serde::Serialize;

use crate::measurement::MeasurementInputs;

/// A preset shipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuickTemplate {
    pub name: &'static str,
    pub length_in: f64,
    pub width_in: f64,
    pub height_in: f64,
    pub weight_lbs: f64,
}

pub const QUICK_TEMPLATES: [QuickTemplate; 4] = [
    QuickTemplate {
        name: "Electronics (Typical)",
        length_in: 24.0,
        width_in: 18.0,
        height_in: 12.0,
        weight_lbs: 45.0,
    },
    QuickTemplate {
        name: "Furniture (Couch)",
        length_in: 96.0,
        width_in: 36.0,
        height_in: 40.0,
        weight_lbs: 150.0,
    },
    QuickTemplate {
        name: "Machinery",
        length_in: 36.0,
        width_in: 24.0,
        height_in: 30.0,
        weight_lbs: 200.0,
    },
    QuickTemplate {
        name: "Textiles (Bolts)",
        length_in: 60.0,
        width_in: 48.0,
        height_in: 48.0,
        weight_lbs: 800.0,
    },
];

impl QuickTemplate {
    /// Fill the four fields from this template.
    ///
    /// Switches the inputs to imperial units and keeps the palletized flag.
    pub fn apply(&self, current: &MeasurementInputs) -> MeasurementInputs {
        MeasurementInputs {
            length: self.length_in.to_string(),
            width: self.width_in.to_string(),
            height: self.height_in.to_string(),
            weight: self.weight_lbs.to_string(),
            use_metric: false,
            palletized: current.palletized,
        }
    }

    /// One-line summary, e.g. `24" x 18" x 12", 45 lbs`
    pub fn summary(&self) -> String {
        format!(
            "{}\" x {}\" x {}\", {} lbs",
            self.length_in, self.width_in, self.height_in, self.weight_lbs
        )
    }
}

/// Look up a template by name (case-insensitive), by its first word, or by
/// its 1-based position.
pub fn find_template(query: &str) -> Option<&'static QuickTemplate> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    if let Ok(index) = query.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| QUICK_TEMPLATES.get(i));
    }
    QUICK_TEMPLATES.iter().find(|template| {
        let name = template.name.to_lowercase();
        name == query || name.split_whitespace().next() == Some(query.as_str())
    })
}
