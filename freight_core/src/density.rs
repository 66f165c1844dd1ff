//! # Density Engine
//!
//! Turns raw form inputs into a density, volume and freight class.
//!
//! ## Pipeline
//!
//! 1. Parse length, width, height and weight (finite, greater than zero)
//! 2. Convert centimeters/kilograms to inches/pounds when metric
//! 3. Apply the pallet floor: a palletized load occupies at least a
//!    48" x 40" footprint, so length and width are raised to those minimums
//! 4. `volume = L * W * H / 1728` cubic feet
//! 5. `density = weight / volume` PCF
//! 6. Look up the class from the unrounded density
//! 7. Round density and volume to two decimals
//!
//! Incomplete input is not an error: [`compute`] returns `None`.
//!
//! ## Example
//!
//! ```rust
//! use freight_core::density::compute;
//! use freight_core::measurement::MeasurementInputs;
//!
//! let loose = MeasurementInputs::imperial("24", "18", "12", "45");
//! assert_eq!(compute(&loose).unwrap().freight_class, "70");
//!
//! let on_pallet = loose.with_palletized(true);
//! assert_eq!(compute(&on_pallet).unwrap().freight_class, "250");
//! ```

use serde::{Deserialize, Serialize};

use crate::classification::classify;
use crate::measurement::{Field, MeasurementInputs};
use crate::units::{round2, to_imperial_length, to_imperial_weight, CubicFeet, CubicInches, Inches, Pounds};

/// Standard pallet length (in)
pub const STANDARD_PALLET_LENGTH: Inches = Inches(48.0);

/// Standard pallet width (in)
pub const STANDARD_PALLET_WIDTH: Inches = Inches(40.0);

/// Shipment dimensions after unit conversion and the pallet floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedShipment {
    pub length: Inches,
    pub width: Inches,
    pub height: Inches,
    pub weight: Pounds,
}

impl NormalizedShipment {
    pub fn volume(&self) -> CubicFeet {
        CubicInches::of_box(self.length, self.width, self.height).into()
    }
}

/// A completed calculation.
///
/// Density and volume are rounded to two decimals; the class was looked up
/// before rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Density in pounds per cubic foot
    pub density_pcf: f64,
    /// Volume in cubic feet
    pub volume_cuft: f64,
    /// Freight class code, e.g. "92.5"
    pub freight_class: String,
}

/// Parse, convert and apply the pallet floor.
///
/// Returns `None` when any of the four fields is not a finite number greater
/// than zero.
pub fn normalize(inputs: &MeasurementInputs) -> Option<NormalizedShipment> {
    let length = inputs.positive_value(Field::Length)?;
    let width = inputs.positive_value(Field::Width)?;
    let height = inputs.positive_value(Field::Height)?;
    let weight = inputs.positive_value(Field::Weight)?;

    let metric = inputs.use_metric;
    let mut length = to_imperial_length(length, metric);
    let mut width = to_imperial_length(width, metric);
    let height = to_imperial_length(height, metric);
    let weight = to_imperial_weight(weight, metric);

    if inputs.palletized {
        length = length.max(STANDARD_PALLET_LENGTH);
        width = width.max(STANDARD_PALLET_WIDTH);
    }

    Some(NormalizedShipment {
        length,
        width,
        height,
        weight,
    })
}

/// Compute density, volume and freight class for the given inputs.
///
/// Pure and cheap; safe to call on every keystroke.
pub fn compute(inputs: &MeasurementInputs) -> Option<CalculationResult> {
    let shipment = normalize(inputs)?;
    let volume = shipment.volume();
    let density = shipment.weight / volume;
    let freight_class = classify(density.0);

    tracing::trace!(
        volume_cuft = volume.0,
        density_pcf = density.0,
        freight_class,
        "computed freight class"
    );

    Some(CalculationResult {
        density_pcf: round2(density.0),
        volume_cuft: round2(volume.0),
        freight_class: freight_class.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_loose_carton() {
        let result = compute(&MeasurementInputs::imperial("24", "18", "12", "45")).unwrap();
        assert_eq!(result.volume_cuft, 3.0);
        assert_eq!(result.density_pcf, 15.0);
        assert_eq!(result.freight_class, "70");
    }

    #[test]
    fn test_palletized_carton() {
        let inputs = MeasurementInputs::imperial("24", "18", "12", "45").with_palletized(true);
        let result = compute(&inputs).unwrap();
        assert_eq!(result.volume_cuft, 13.33);
        assert!(approx(result.density_pcf, 3.375, 0.0051));
        assert_eq!(result.freight_class, "250");
    }

    #[test]
    fn test_pallet_floor_is_a_minimum() {
        let small = MeasurementInputs::imperial("20", "20", "10", "100").with_palletized(true);
        let shipment = normalize(&small).unwrap();
        assert_eq!(shipment.length, Inches(48.0));
        assert_eq!(shipment.width, Inches(40.0));
        assert_eq!(shipment.height, Inches(10.0));

        let large = MeasurementInputs::imperial("60", "50", "10", "100").with_palletized(true);
        let shipment = normalize(&large).unwrap();
        assert_eq!(shipment.length, Inches(60.0));
        assert_eq!(shipment.width, Inches(50.0));
    }

    #[test]
    fn test_pallet_floor_applies_after_conversion() {
        // 100 cm is about 39.4 in, under the 40 in pallet width
        let inputs = MeasurementInputs::metric("150", "100", "50", "20").with_palletized(true);
        let shipment = normalize(&inputs).unwrap();
        assert!(approx(shipment.length.0, 150.0 / 2.54, 1e-9));
        assert_eq!(shipment.width, Inches(40.0));
    }

    #[test]
    fn test_incomplete_inputs_yield_none() {
        let cases = [
            MeasurementInputs::imperial("", "18", "12", "45"),
            MeasurementInputs::imperial("24", "abc", "12", "45"),
            MeasurementInputs::imperial("24", "18", "0", "45"),
            MeasurementInputs::imperial("24", "18", "12", "-5"),
            MeasurementInputs::default(),
        ];
        for inputs in &cases {
            assert!(compute(inputs).is_none(), "expected no result for {:?}", inputs);
        }
    }

    #[test]
    fn test_density_formula() {
        let samples = [
            ("10", "10", "10", "5"),
            ("48", "40", "36", "500"),
            ("96", "36", "40", "150"),
            ("3.5", "2.25", "7", "1.1"),
        ];
        for (l, w, h, wt) in samples {
            let result = compute(&MeasurementInputs::imperial(l, w, h, wt)).unwrap();
            let (l, w, h, wt): (f64, f64, f64, f64) =
                (l.parse().unwrap(), w.parse().unwrap(), h.parse().unwrap(), wt.parse().unwrap());
            let expected = wt / (l * w * h / 1728.0);
            assert!(approx(result.density_pcf, expected, 0.005 + 1e-9));
        }
    }

    #[test]
    fn test_metric_matches_imperial() {
        let samples = [(60.96, 45.72, 30.48, 20.0), (120.0, 100.0, 80.0, 350.0), (10.0, 10.0, 10.0, 1.0)];
        for palletized in [false, true] {
            for (l, w, h, wt) in samples {
                let metric = MeasurementInputs::metric(l.to_string(), w.to_string(), h.to_string(), wt.to_string())
                    .with_palletized(palletized);
                let imperial = MeasurementInputs::imperial(
                    (l / 2.54).to_string(),
                    (w / 2.54).to_string(),
                    (h / 2.54).to_string(),
                    (wt * 2.20462).to_string(),
                )
                .with_palletized(palletized);

                let a = compute(&metric).unwrap();
                let b = compute(&imperial).unwrap();
                assert!(approx(a.density_pcf, b.density_pcf, 0.011));
                assert!(approx(a.volume_cuft, b.volume_cuft, 0.011));
                assert_eq!(a.freight_class, b.freight_class);
            }
        }
    }

    #[test]
    fn test_class_uses_unrounded_density() {
        // 1728 in^3 with 7.996 lb -> 7.996 PCF, rounds to 8.0 but is class 125
        let result = compute(&MeasurementInputs::imperial("12", "12", "12", "7.996")).unwrap();
        assert_eq!(result.density_pcf, 8.0);
        assert_eq!(result.freight_class, "125");
    }

    #[test]
    fn test_tiny_volume_is_top_tier() {
        let result = compute(&MeasurementInputs::imperial("0.001", "0.001", "0.001", "10")).unwrap();
        assert!(result.density_pcf.is_finite());
        assert_eq!(result.freight_class, "50");
    }
}
