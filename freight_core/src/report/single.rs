//! Single calculation report.

use super::canvas::PageCanvas;
use super::layout::{
    Cursor, BODY_STYLE, CLASS_STYLE, DISCLAIMER_HEIGHT, META_STYLE, SECTION_STYLE,
};
use super::sink::DocumentSink;
use super::{format_timestamp, prepared_by_line, sanitize_filename, SingleReport, SINGLE_DEFAULT_STEM};
use crate::errors::FreightResult;

/// Render the report for one calculation and deliver it.
///
/// Returns the delivered filename, or `Ok(None)` without drawing or
/// delivering anything when the request carries no result.
///
/// Layout, top to bottom: title block, generation time, optional
/// "Prepared By", shipment details, results, and the disclaimer anchored to
/// the bottom of the page.
pub fn render_single<C, S>(mut canvas: C, sink: &mut S, report: &SingleReport) -> FreightResult<Option<String>>
where
    C: PageCanvas,
    S: DocumentSink<C::Document>,
{
    let Some(result) = report.result.as_ref() else {
        tracing::debug!("single report requested without a result; nothing to render");
        return Ok(None);
    };

    let inputs = &report.inputs;
    let units = inputs.unit_system();
    let length_unit = units.length_label();
    let weight_unit = units.weight_label();

    let mut cursor = Cursor::new(&mut canvas);

    cursor.title_block("Freight Class Calculation Report", &report.file_label);
    cursor.text(
        &format!("Generated: {}", format_timestamp(&report.generated_at)),
        &META_STYLE,
        16.0,
    );
    if let Some(line) = prepared_by_line(report.prepared_by.as_deref()) {
        cursor.text(&line, &META_STYLE, 16.0);
    }
    cursor.skip(4.0);
    cursor.rule(18.0);

    cursor.text("Shipment Details", &SECTION_STYLE, 22.0);
    let details = [
        format!("Length: {} {}", inputs.length.trim(), length_unit),
        format!("Width: {} {}", inputs.width.trim(), length_unit),
        format!("Height: {} {}", inputs.height.trim(), length_unit),
        format!("Weight: {} {}", inputs.weight.trim(), weight_unit),
        format!("Palletized: {}", if inputs.palletized { "Yes" } else { "No" }),
    ];
    for line in &details {
        cursor.text(line, &BODY_STYLE, 18.0);
    }
    cursor.skip(6.0);
    cursor.rule(18.0);

    cursor.text("Results", &SECTION_STYLE, 22.0);
    cursor.text(&format!("Density: {:.2} PCF", result.density_pcf), &BODY_STYLE, 18.0);
    cursor.text(&format!("Volume: {:.2} cu ft", result.volume_cuft), &BODY_STYLE, 22.0);
    cursor.text(&format!("Freight Class: {}", result.freight_class), &CLASS_STYLE, 24.0);

    let footer_top = cursor.safe_bottom() - DISCLAIMER_HEIGHT;
    cursor.ensure_room(DISCLAIMER_HEIGHT);
    if cursor.y() < footer_top {
        cursor.move_to(footer_top);
    }
    cursor.disclaimer();

    let document = canvas.finish()?;
    let filename = sanitize_filename(&report.file_label, SINGLE_DEFAULT_STEM);
    sink.deliver(document, &filename)?;
    tracing::info!(%filename, "single load report delivered");

    Ok(Some(filename))
}
