//! # freight_core - LTL Density and Freight Class Engine
//!
//! `freight_core` is the computational heart of Freight Class Pro. It turns
//! shipment dimensions and weight into a density (pounds per cubic foot) and
//! maps that density onto the 13-tier NMFC density scale. Around that engine
//! it provides a session-scoped collection of saved loads, a best-effort
//! persistence contract for the input draft, and PDF report generation.
//!
//! ## Design Philosophy
//!
//! - **Stateless engine**: `density::compute` is a pure function, cheap enough
//!   to run on every keystroke
//! - **Incomplete is not an error**: unparseable or non-positive input yields
//!   `None`, never an `Err`
//! - **Best-effort persistence**: storage failures are logged and returned,
//!   never load-blocking
//! - **Deterministic reports**: layouts depend only on their inputs, the
//!   drawing surface and the sink are traits
//!
//! ## Quick Start
//!
//! ```rust
//! use freight_core::density::compute;
//! use freight_core::measurement::MeasurementInputs;
//!
//! let inputs = MeasurementInputs::imperial("24", "18", "12", "45");
//! let result = compute(&inputs).unwrap();
//!
//! assert_eq!(result.volume_cuft, 3.0);
//! assert_eq!(result.density_pcf, 15.0);
//! assert_eq!(result.freight_class, "70");
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Type-safe unit wrappers and metric to imperial normalization
//! - [`classification`] - The density tier table and class lookup
//! - [`measurement`] - Raw form inputs as typed by the user
//! - [`density`] - The density calculation engine
//! - [`persistence`] - Key-value store contract and draft persistence
//! - [`file_io`] - File-backed store with atomic writes and locking
//! - [`loads`] - Saved load records for multi-load sessions
//! - [`templates`] - Quick templates for common commodities
//! - [`report`] - Single and multi-load PDF reports
//! - [`errors`] - Structured error types

pub mod classification;
pub mod density;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod loads;
pub mod measurement;
pub mod persistence;
pub mod report;
pub mod templates;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use classification::{classify, ClassificationTier};
pub use density::{compute, CalculationResult};
pub use errors::{FreightError, FreightResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::FileStore;
pub use loads::{LoadCollection, LoadId, SavedLoadRecord};
pub use measurement::{MeasurementInputs, UnitSystem};
pub use persistence::{DraftStore, KeyValueStore, MemoryStore, DRAFT_KEY};
