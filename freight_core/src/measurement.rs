//! # Measurement Inputs
//!
//! The raw form state: four free-text numeric fields and two toggles. Fields
//! stay as strings so partially typed values ("12.", "") survive a round trip
//! through storage; they are parsed only when the engine runs.
//!
//! ## JSON Shape
//!
//! ```json
//! { "length": "24", "width": "18", "height": "12", "weight": "45",
//!   "useMetric": false, "palletized": false }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit system the user is typing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Inches and pounds
    Imperial,
    /// Centimeters and kilograms
    Metric,
}

impl UnitSystem {
    /// Suffix for length, width and height
    pub fn length_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "cm",
        }
    }

    /// Suffix for weight
    pub fn weight_label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lbs",
            UnitSystem::Metric => "kg",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.length_label(), self.weight_label())
    }
}

/// Which of the four numeric fields is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Width,
    Height,
    Weight,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Length, Field::Width, Field::Height, Field::Weight];

    /// Parse a field name as typed in the shell ("length", "l", ...)
    pub fn from_name(name: &str) -> Option<Field> {
        match name.trim().to_ascii_lowercase().as_str() {
            "length" | "l" => Some(Field::Length),
            "width" | "w" => Some(Field::Width),
            "height" | "h" => Some(Field::Height),
            "weight" | "wt" => Some(Field::Weight),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Length => "length",
            Field::Width => "width",
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }
}

/// Current form inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInputs {
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
    pub use_metric: bool,
    pub palletized: bool,
}

impl MeasurementInputs {
    /// Inputs in inches and pounds, not palletized
    pub fn imperial(
        length: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        MeasurementInputs {
            length: length.into(),
            width: width.into(),
            height: height.into(),
            weight: weight.into(),
            use_metric: false,
            palletized: false,
        }
    }

    /// Inputs in centimeters and kilograms, not palletized
    pub fn metric(
        length: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        MeasurementInputs {
            use_metric: true,
            ..MeasurementInputs::imperial(length, width, height, weight)
        }
    }

    /// Builder-style palletized toggle
    pub fn with_palletized(mut self, palletized: bool) -> Self {
        self.palletized = palletized;
        self
    }

    pub fn unit_system(&self) -> UnitSystem {
        if self.use_metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Length => &self.length,
            Field::Width => &self.width,
            Field::Height => &self.height,
            Field::Weight => &self.weight,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Length => self.length = value,
            Field::Width => self.width = value,
            Field::Height => self.height = value,
            Field::Weight => self.weight = value,
        }
    }

    /// Parsed value of a field, if it is a finite number greater than zero.
    pub fn positive_value(&self, field: Field) -> Option<f64> {
        parse_positive(self.field(field))
    }

    /// True when all four fields hold usable numbers.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|&field| self.positive_value(field).is_some())
    }

    /// Cleared inputs that keep the chosen unit system.
    ///
    /// The palletized toggle is switched off.
    pub fn reset(&self) -> Self {
        MeasurementInputs {
            use_metric: self.use_metric,
            ..MeasurementInputs::default()
        }
    }
}

/// Parse a typed value: trimmed, finite and strictly positive.
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}
