//! # Report Generation
//!
//! Builds printable freight class reports, either for the current
//! calculation ([`render_single`]) or for every saved load
//! ([`render_multi`]).
//!
//! ## Architecture
//!
//! - Layouts are plain functions that draw onto a [`PageCanvas`] and hand
//!   the finished document to a [`DocumentSink`]
//! - The generation timestamp is part of the request, so the same request
//!   always produces the same drawing calls
//! - [`TypstCanvas`] turns the drawing calls into a Typst source compiled to
//!   PDF bytes; [`RecordingCanvas`] keeps them for inspection
//! - Calling a layout without something to report (no result, no saved
//!   loads) is a no-op returning `Ok(None)`
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use freight_core::density::compute;
//! use freight_core::measurement::MeasurementInputs;
//! use freight_core::report::{render_single, FileSink, SingleReport, TypstCanvas};
//!
//! let inputs = MeasurementInputs::imperial("24", "18", "12", "45");
//! let report = SingleReport {
//!     result: compute(&inputs),
//!     inputs,
//!     file_label: "PO 4471".to_string(),
//!     prepared_by: Some("Dock 3".to_string()),
//!     generated_at: Local::now().naive_local(),
//! };
//!
//! let mut sink = FileSink::new(".");
//! let filename = render_single(TypstCanvas::letter(), &mut sink, &report)?;
//! assert_eq!(filename.as_deref(), Some("po-4471.pdf"));
//! # Ok::<(), freight_core::errors::FreightError>(())
//! ```

pub mod canvas;
mod layout;
mod multi;
mod single;
pub mod sink;
pub mod typst_canvas;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::density::CalculationResult;
use crate::loads::SavedLoadRecord;
use crate::measurement::MeasurementInputs;

pub use canvas::{
    Color, DrawOp, FontWeight, LineStyle, PageCanvas, PageSize, Point, RecordedDocument, RecordingCanvas,
    TextStyle,
};
pub use multi::render_multi;
pub use single::render_single;
#[cfg(not(target_arch = "wasm32"))]
pub use sink::FileSink;
pub use sink::{DocumentSink, MemorySink};
pub use typst_canvas::TypstCanvas;

/// Filename stem used when a single-load report has no label
pub const SINGLE_DEFAULT_STEM: &str = "freight-calculation";

/// Filename stem used when a multi-load report has no label
pub const MULTI_DEFAULT_STEM: &str = "multi-load-report";

/// Request for a report on one calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleReport {
    pub inputs: MeasurementInputs,
    /// `None` when the inputs are incomplete; rendering is then a no-op
    pub result: Option<CalculationResult>,
    /// Shown upper-cased in the title block and used for the filename
    pub file_label: String,
    pub prepared_by: Option<String>,
    /// Local wall-clock time printed on the report
    pub generated_at: NaiveDateTime,
}

/// Request for a report on every saved load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiReport {
    /// Records in display order
    pub records: Vec<SavedLoadRecord>,
    pub file_label: String,
    pub prepared_by: Option<String>,
    pub generated_at: NaiveDateTime,
}

/// Turn a user label into a safe PDF filename.
///
/// Trims the label (falling back to `default_stem` when blank), replaces
/// every character outside `[A-Za-z0-9-]` with `-`, lower-cases the result
/// and appends `.pdf`.
///
/// ```rust
/// use freight_core::report::{sanitize_filename, SINGLE_DEFAULT_STEM};
///
/// assert_eq!(sanitize_filename("Order #12345!", SINGLE_DEFAULT_STEM), "order--12345-.pdf");
/// assert_eq!(sanitize_filename("   ", SINGLE_DEFAULT_STEM), "freight-calculation.pdf");
/// ```
pub fn sanitize_filename(label: &str, default_stem: &str) -> String {
    let trimmed = label.trim();
    let stem = if trimmed.is_empty() { default_stem } else { trimmed };

    let mut filename: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect::<String>()
        .to_ascii_lowercase();
    filename.push_str(".pdf");
    filename
}

/// Report timestamp, e.g. "October 19, 2026 at 3:05 PM"
pub(crate) fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// Non-blank, trimmed "Prepared By" value
pub(crate) fn prepared_by_line(prepared_by: Option<&str>) -> Option<String> {
    prepared_by
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!("Prepared By: {}", name))
}
