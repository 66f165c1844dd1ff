//! Multi-load report.

use super::canvas::PageCanvas;
use super::layout::{Cursor, DISCLAIMER_HEIGHT, META_STYLE};
use super::sink::DocumentSink;
use super::{format_timestamp, prepared_by_line, sanitize_filename, MultiReport, MULTI_DEFAULT_STEM};
use crate::errors::FreightResult;
use crate::loads::SavedLoadRecord;
use crate::report::canvas::{Color, TextStyle};

const NAME_STYLE: TextStyle = TextStyle::new(12.0).bold();
const DETAIL_STYLE: TextStyle = TextStyle::new(10.0).color(Color::GRAY);
const RECORD_CLASS_STYLE: TextStyle = TextStyle::new(11.0).bold().color(Color::BRAND);

const NAME_ADVANCE: f64 = 18.0;
const DETAIL_ADVANCE: f64 = 14.0;
const CLASS_ADVANCE: f64 = 18.0;
const SEPARATOR_ADVANCE: f64 = 10.0;

/// Height of one record block, separator included
pub const RECORD_BLOCK_HEIGHT: f64 =
    NAME_ADVANCE + 2.0 * DETAIL_ADVANCE + CLASS_ADVANCE + SEPARATOR_ADVANCE;

/// Render every saved load into one report and deliver it.
///
/// Records appear in collection order. A record block is never split: when
/// the next block would cross the bottom margin a new page is started
/// first. Returns the delivered filename, or `Ok(None)` without drawing or
/// delivering anything when there are no records.
pub fn render_multi<C, S>(mut canvas: C, sink: &mut S, report: &MultiReport) -> FreightResult<Option<String>>
where
    C: PageCanvas,
    S: DocumentSink<C::Document>,
{
    if report.records.is_empty() {
        tracing::debug!("multi-load report requested with no saved loads; nothing to render");
        return Ok(None);
    }

    let mut cursor = Cursor::new(&mut canvas);

    cursor.title_block("Multi-Load Freight Report", &report.file_label);
    cursor.text(
        &format!(
            "Total Loads: {} | Generated: {}",
            report.records.len(),
            format_timestamp(&report.generated_at)
        ),
        &META_STYLE,
        16.0,
    );
    if let Some(line) = prepared_by_line(report.prepared_by.as_deref()) {
        cursor.text(&line, &META_STYLE, 16.0);
    }
    cursor.skip(4.0);
    cursor.rule(16.0);

    for (index, record) in report.records.iter().enumerate() {
        cursor.ensure_room(RECORD_BLOCK_HEIGHT);
        record_block(&mut cursor, index + 1, record);
    }

    cursor.skip(8.0);
    cursor.ensure_room(DISCLAIMER_HEIGHT);
    cursor.disclaimer();

    let document = canvas.finish()?;
    let filename = sanitize_filename(&report.file_label, MULTI_DEFAULT_STEM);
    sink.deliver(document, &filename)?;
    tracing::info!(%filename, loads = report.records.len(), "multi-load report delivered");

    Ok(Some(filename))
}

fn record_block<C: PageCanvas>(cursor: &mut Cursor<'_, C>, position: usize, record: &SavedLoadRecord) {
    let inputs = &record.inputs;
    let units = inputs.unit_system();

    let mut dimensions = format!(
        "Dimensions: {} x {} x {} {} | Weight: {} {}",
        inputs.length.trim(),
        inputs.width.trim(),
        inputs.height.trim(),
        units.length_label(),
        inputs.weight.trim(),
        units.weight_label(),
    );
    if inputs.palletized {
        dimensions.push_str(" | Palletized");
    }

    cursor.text(&format!("{}. {}", position, record.name), &NAME_STYLE, NAME_ADVANCE);
    cursor.text(&dimensions, &DETAIL_STYLE, DETAIL_ADVANCE);
    cursor.text(
        &format!(
            "Density: {:.2} PCF | Volume: {:.2} cu ft",
            record.result.density_pcf, record.result.volume_cuft
        ),
        &DETAIL_STYLE,
        DETAIL_ADVANCE,
    );
    cursor.text(
        &format!("Freight Class: {}", record.result.freight_class),
        &RECORD_CLASS_STYLE,
        CLASS_ADVANCE,
    );
    cursor.rule(SEPARATOR_ADVANCE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::LoadCollection;
    use crate::measurement::MeasurementInputs;
    use crate::report::canvas::{DrawOp, RecordedDocument, RecordingCanvas};
    use crate::report::layout::MARGIN_BOTTOM;
    use crate::report::sink::MemorySink;
    use chrono::NaiveDate;

    fn request(count: usize) -> MultiReport {
        let mut loads = LoadCollection::new();
        for i in 0..count {
            let inputs = MeasurementInputs::imperial("24", "18", (12 + i).to_string(), "45");
            loads.add_computed("", inputs).unwrap();
        }
        MultiReport {
            records: loads.records().to_vec(),
            file_label: "Week 42".to_string(),
            prepared_by: None,
            generated_at: NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(17, 0, 0)
                .unwrap(),
        }
    }

    fn render(report: &MultiReport) -> (Option<String>, MemorySink<RecordedDocument>) {
        let mut sink = MemorySink::new();
        let filename = render_multi(RecordingCanvas::letter(), &mut sink, report).unwrap();
        (filename, sink)
    }

    #[test]
    fn test_header_and_records_in_order() {
        let (filename, sink) = render(&request(2));
        assert_eq!(filename.as_deref(), Some("week-42.pdf"));

        let document = &sink.last().unwrap().1;
        let texts = document.texts();
        assert_eq!(texts[0], "FreightClassPro");
        assert_eq!(texts[1], "Multi-Load Freight Report");
        assert_eq!(texts[2], "WEEK 42");
        assert_eq!(texts[3], "Total Loads: 2 | Generated: October 19, 2026 at 5:00 PM");
        assert_eq!(texts[4], "1. Load 1");
        assert_eq!(texts[5], "Dimensions: 24 x 18 x 12 in | Weight: 45 lbs");
        assert_eq!(texts[6], "Density: 15.00 PCF | Volume: 3.00 cu ft");
        assert_eq!(texts[7], "Freight Class: 70");
        assert_eq!(texts[8], "2. Load 2");
    }

    #[test]
    fn test_class_line_is_bold() {
        let (_, sink) = render(&request(1));
        let (_, style) = sink.last().unwrap().1.find_text("Freight Class:").unwrap();
        assert!(style.is_bold());
    }

    #[test]
    fn test_paginates_without_splitting_blocks() {
        let (_, sink) = render(&request(30));
        let document = &sink.last().unwrap().1;
        assert!(document.page_count() > 1);

        let safe_bottom = document.page_size.height - MARGIN_BOTTOM;
        for page in 0..document.page_count() {
            let texts = document.page_texts(page);
            // Each record starts with its "N. name" line and ends with its class line
            let starts = texts.iter().filter(|t| t.contains(". Load ")).count();
            let ends = texts.iter().filter(|t| t.starts_with("Freight Class:")).count();
            assert_eq!(starts, ends, "record split on page {}", page);

            for op in &document.pages[page] {
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y <= safe_bottom, "text below safe area on page {}", page);
                }
            }
        }

        let names = document.texts().iter().filter(|t| t.contains(". Load ")).count();
        assert_eq!(names, 30);
    }

    #[test]
    fn test_continuation_pages_start_at_top_margin() {
        let (_, sink) = render(&request(30));
        let document = &sink.last().unwrap().1;
        match &document.pages[1][0] {
            DrawOp::Text { y, content, .. } => {
                assert_eq!(*y, crate::report::layout::MARGIN_TOP);
                assert!(content.contains(". Load "));
            }
            other => panic!("expected text first on page 2, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_collection_is_noop() {
        let (filename, sink) = render(&request(0));
        assert!(filename.is_none());
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn test_blank_label_uses_default_stem() {
        let mut report = request(1);
        report.file_label = "  ".to_string();
        let (filename, _) = render(&report);
        assert_eq!(filename.as_deref(), Some("multi-load-report.pdf"));
    }

    #[test]
    fn test_palletized_marker_and_prepared_by() {
        let mut loads = LoadCollection::new();
        loads
            .add_computed("Skid A", MeasurementInputs::imperial("20", "20", "30", "300").with_palletized(true))
            .unwrap();
        let mut report = request(0);
        report.records = loads.records().to_vec();
        report.prepared_by = Some("Ops".to_string());

        let (_, sink) = render(&report);
        let texts = sink.last().unwrap().1.texts();
        assert!(texts.contains(&"Prepared By: Ops"));
        assert!(texts.contains(&"1. Skid A"));
        assert!(texts.contains(&"Dimensions: 20 x 20 x 30 in | Weight: 300 lbs | Palletized"));
    }
}
