//! # Unit Types
//!
//! Type-safe wrappers for shipping units. These provide compile-time
//! safety against mixing metric and imperial values while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Imperial Units (Primary)
//!
//! Freight class is defined in pounds per cubic foot, so every calculation
//! is normalized to imperial units before any arithmetic happens:
//! - Length: inches (in)
//! - Weight: pounds (lb)
//! - Volume: cubic inches, cubic feet (1 ft³ = 1728 in³)
//! - Density: pounds per cubic foot (PCF)
//!
//! Metric input (centimeters, kilograms) is accepted at the boundary and
//! converted with [`to_imperial_length`] and [`to_imperial_weight`].
//!
//! ## Example
//!
//! ```rust
//! use freight_core::units::{Centimeters, Inches, Kilograms, Pounds};
//!
//! let length: Inches = Centimeters(254.0).into();
//! assert!((length.0 - 100.0).abs() < 1e-9);
//!
//! let weight: Pounds = Kilograms(10.0).into();
//! assert!((weight.0 - 22.0462).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

/// Cubic inches per cubic foot (12³)
pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_INCH)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

impl Inches {
    /// The larger of two lengths
    pub fn max(self, other: Inches) -> Inches {
        Inches(self.0.max(other.0))
    }
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 * LB_PER_KG)
    }
}

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 / LB_PER_KG)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicInches(pub f64);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFeet(pub f64);

impl From<CubicInches> for CubicFeet {
    fn from(cu_in: CubicInches) -> Self {
        CubicFeet(cu_in.0 / CUBIC_INCHES_PER_CUBIC_FOOT)
    }
}

impl From<CubicFeet> for CubicInches {
    fn from(cu_ft: CubicFeet) -> Self {
        CubicInches(cu_ft.0 * CUBIC_INCHES_PER_CUBIC_FOOT)
    }
}

impl CubicInches {
    /// Volume of a rectangular box
    pub fn of_box(length: Inches, width: Inches, height: Inches) -> Self {
        CubicInches(length.0 * width.0 * height.0)
    }
}

// ============================================================================
// Density Units
// ============================================================================

/// Density in pounds per cubic foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pcf(pub f64);

impl Div<CubicFeet> for Pounds {
    type Output = Pcf;
    fn div(self, rhs: CubicFeet) -> Pcf {
        Pcf(self.0 / rhs.0)
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Normalize a linear measurement to inches.
///
/// Identity when `is_metric` is false, otherwise the value is taken as
/// centimeters and divided by 2.54.
pub fn to_imperial_length(value: f64, is_metric: bool) -> Inches {
    if is_metric {
        Centimeters(value).into()
    } else {
        Inches(value)
    }
}

/// Normalize a weight to pounds.
///
/// Identity when `is_metric` is false, otherwise the value is taken as
/// kilograms and multiplied by 2.20462.
pub fn to_imperial_weight(value: f64, is_metric: bool) -> Pounds {
    if is_metric {
        Kilograms(value).into()
    } else {
        Pounds(value)
    }
}

/// Round to two decimal places, the precision results are presented at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kilograms);
impl_arithmetic!(CubicInches);
impl_arithmetic!(CubicFeet);
impl_arithmetic!(Pcf);
