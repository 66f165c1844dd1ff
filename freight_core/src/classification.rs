//! # Freight Classification Table
//!
//! The 13-tier density scale used to assign an LTL freight class. Each tier
//! covers a half-open density range `[min, max)` in pounds per cubic foot;
//! the top tier is unbounded. Together the tiers partition `[0, ∞)`.
//!
//! | Density (PCF)        | Class |
//! |----------------------|-------|
//! | Less than 1          | 400   |
//! | 1 to less than 2     | 300   |
//! | 2 to less than 4     | 250   |
//! | 4 to less than 6     | 175   |
//! | 6 to less than 8     | 125   |
//! | 8 to less than 10    | 100   |
//! | 10 to less than 12   | 92.5  |
//! | 12 to less than 15   | 85    |
//! | 15 to less than 22.5 | 70    |
//! | 22.5 to less than 30 | 65    |
//! | 30 to less than 35   | 60    |
//! | 35 to less than 50   | 55    |
//! | 50 or greater        | 50    |
//!
//! ## Example
//!
//! ```rust
//! use freight_core::classification::classify;
//!
//! assert_eq!(classify(15.0), "70");
//! assert_eq!(classify(8.0), "100"); // boundaries resolve to the denser tier
//! assert_eq!(classify(1_000.0), "50");
//! ```

use serde::Serialize;

/// One row of the density scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationTier {
    /// Inclusive lower bound (PCF)
    pub min_density: f64,
    /// Exclusive upper bound (PCF), `None` for the unbounded top tier
    pub max_density: Option<f64>,
    /// Freight class code
    pub code: &'static str,
}

impl ClassificationTier {
    const fn bounded(min_density: f64, max_density: f64, code: &'static str) -> Self {
        ClassificationTier {
            min_density,
            max_density: Some(max_density),
            code,
        }
    }

    /// Whether `density` falls inside `[min_density, max_density)`
    pub fn contains(&self, density: f64) -> bool {
        density >= self.min_density && self.max_density.map_or(true, |max| density < max)
    }

    /// Human readable range, e.g. "2 to less than 4"
    pub fn range_label(&self) -> String {
        match self.max_density {
            Some(max) if self.min_density == 0.0 => format!("Less than {}", max),
            Some(max) => format!("{} to less than {}", self.min_density, max),
            None => format!("{} or greater", self.min_density),
        }
    }
}

/// Canonical tier table, ordered from lightest to densest freight.
pub const TIERS: [ClassificationTier; 13] = [
    ClassificationTier::bounded(0.0, 1.0, "400"),
    ClassificationTier::bounded(1.0, 2.0, "300"),
    ClassificationTier::bounded(2.0, 4.0, "250"),
    ClassificationTier::bounded(4.0, 6.0, "175"),
    ClassificationTier::bounded(6.0, 8.0, "125"),
    ClassificationTier::bounded(8.0, 10.0, "100"),
    ClassificationTier::bounded(10.0, 12.0, "92.5"),
    ClassificationTier::bounded(12.0, 15.0, "85"),
    ClassificationTier::bounded(15.0, 22.5, "70"),
    ClassificationTier::bounded(22.5, 30.0, "65"),
    ClassificationTier::bounded(30.0, 35.0, "60"),
    ClassificationTier::bounded(35.0, 50.0, "55"),
    ClassificationTier {
        min_density: 50.0,
        max_density: None,
        code: "50",
    },
];

/// Class returned when the density cannot be placed on the scale.
pub const FALLBACK_CLASS: &str = "400";

/// Find the tier containing `density`.
///
/// Returns `None` for NaN, infinite or negative densities.
pub fn tier_for(density: f64) -> Option<&'static ClassificationTier> {
    if !density.is_finite() || density < 0.0 {
        return None;
    }
    TIERS.iter().find(|tier| tier.contains(density))
}

/// Map a density (PCF) to its freight class code.
///
/// Densities at or above 50 PCF are class "50". A density that is not a
/// finite non-negative number falls back to class "400".
pub fn classify(density: f64) -> &'static str {
    tier_for(density).map_or(FALLBACK_CLASS, |tier| tier.code)
}

/// One row of the reference table shown next to results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRow {
    pub density_range: String,
    pub code: &'static str,
}

/// Reference table rows, generated from [`TIERS`] so the display always
/// agrees with [`classify`].
pub fn reference_table() -> Vec<ReferenceRow> {
    TIERS
        .iter()
        .map(|tier| ReferenceRow {
            density_range: tier.range_label(),
            code: tier.code,
        })
        .collect()
}
