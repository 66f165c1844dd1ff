//! End-to-end checks across the engine, the saved-load collection, draft
//! persistence and report delivery.

use chrono::NaiveDate;
use freight_core::classification::{classify, reference_table};
use freight_core::density::compute;
use freight_core::measurement::MeasurementInputs;
use freight_core::persistence::{DraftStore, MemoryStore};
use freight_core::report::{
    render_multi, render_single, sanitize_filename, FileSink, MemorySink, MultiReport, RecordedDocument,
    RecordingCanvas, SingleReport, MULTI_DEFAULT_STEM, SINGLE_DEFAULT_STEM,
};
use freight_core::templates::find_template;
use freight_core::{FileStore, LoadCollection};
use tempfile::TempDir;

fn at_noon() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_electronics_carton() {
    let result = compute(&MeasurementInputs::imperial("24", "18", "12", "45")).unwrap();
    assert_eq!(result.volume_cuft, 3.0);
    assert_eq!(result.density_pcf, 15.0);
    assert_eq!(result.freight_class, "70");
}

#[test]
fn test_electronics_carton_palletized() {
    let inputs = MeasurementInputs::imperial("24", "18", "12", "45").with_palletized(true);
    let result = compute(&inputs).unwrap();
    assert_eq!(result.volume_cuft, 13.33);
    assert!((result.density_pcf - 3.375).abs() < 0.0051);
    assert_eq!(result.freight_class, "250");
}

#[test]
fn test_incomplete_inputs_give_nothing() {
    for (l, w, h, wt) in [
        ("", "18", "12", "45"),
        ("24", "abc", "12", "45"),
        ("24", "18", "0", "45"),
        ("24", "18", "12", "-45"),
    ] {
        assert!(compute(&MeasurementInputs::imperial(l, w, h, wt)).is_none());
    }
}

#[test]
fn test_metric_matches_converted_imperial() {
    let metric = compute(&MeasurementInputs::metric("121.92", "101.6", "91.44", "226.796")).unwrap();
    let imperial = compute(&MeasurementInputs::imperial("48", "40", "36", "500")).unwrap();
    assert_eq!(metric.volume_cuft, imperial.volume_cuft);
    assert!((metric.density_pcf - imperial.density_pcf).abs() <= 0.01);
    assert_eq!(metric.freight_class, imperial.freight_class);
}

#[test]
fn test_reference_table_agrees_with_classify() {
    let rows = reference_table();
    assert_eq!(rows.len(), 13);
    assert_eq!(classify(8.0), "100");
    assert_eq!(classify(0.5), "400");
    assert_eq!(classify(60.0), "50");
}

#[test]
fn test_saved_loads_into_multi_report() {
    let mut loads = LoadCollection::new();
    let first = loads
        .add_computed("", find_template("electronics").unwrap().apply(&MeasurementInputs::default()))
        .unwrap()
        .id;
    loads
        .add_computed("Couch", find_template("furniture").unwrap().apply(&MeasurementInputs::default()))
        .unwrap();
    assert!(loads.add_computed("broken", MeasurementInputs::default()).is_none());
    assert_eq!(loads.len(), 2);

    let second = loads.add_computed("", MeasurementInputs::imperial("10", "10", "10", "10")).unwrap().id;
    assert_ne!(first, second);
    assert!(loads.remove(first).is_some());
    assert!(loads.remove(first).is_none());
    assert_eq!(loads.len(), 2);

    let report = MultiReport {
        records: loads.records().to_vec(),
        file_label: String::new(),
        prepared_by: None,
        generated_at: at_noon(),
    };
    let mut sink: MemorySink<RecordedDocument> = MemorySink::new();
    let filename = render_multi(RecordingCanvas::letter(), &mut sink, &report).unwrap();
    assert_eq!(filename.as_deref(), Some("multi-load-report.pdf"));
    assert_eq!(sink.delivered.len(), 1);

    let texts = sink.last().unwrap().1.texts();
    assert!(texts.contains(&"1. Couch"));
    assert!(texts.contains(&"2. Load 3"));

    loads.clear();
    let empty = MultiReport {
        records: loads.records().to_vec(),
        ..report
    };
    assert!(render_multi(RecordingCanvas::letter(), &mut sink, &empty).unwrap().is_none());
    assert_eq!(sink.delivered.len(), 1);
}

#[test]
fn test_filename_sanitization() {
    assert_eq!(sanitize_filename("Order #12345!", SINGLE_DEFAULT_STEM), "order--12345-.pdf");
    assert_eq!(sanitize_filename("", SINGLE_DEFAULT_STEM), "freight-calculation.pdf");
    assert_eq!(sanitize_filename("", MULTI_DEFAULT_STEM), "multi-load-report.pdf");
}

#[test]
fn test_draft_survives_restart_on_disk() {
    let temp = TempDir::new().unwrap();
    let inputs = MeasurementInputs::metric("120", "100", "80", "350").with_palletized(true);

    let mut drafts = DraftStore::new(FileStore::open(temp.path()).unwrap());
    drafts.save(&inputs).unwrap();

    let reopened = DraftStore::new(FileStore::open(temp.path()).unwrap());
    assert_eq!(reopened.load(), inputs);
}

#[test]
fn test_corrupt_draft_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.insert_raw("freightClassPro", "{not json");
    assert_eq!(DraftStore::new(store).load(), MeasurementInputs::default());
}

#[test]
fn test_single_report_written_to_disk() {
    let temp = TempDir::new().unwrap();
    let inputs = MeasurementInputs::imperial("24", "18", "12", "45");
    let report = SingleReport {
        result: compute(&inputs),
        inputs,
        file_label: "Order #12345!".to_string(),
        prepared_by: None,
        generated_at: at_noon(),
    };

    let mut sink = FileSink::new(temp.path());
    let filename = render_single(freight_core::report::TypstCanvas::letter(), &mut sink, &report).unwrap();
    assert_eq!(filename.as_deref(), Some("order--12345-.pdf"));

    let bytes = std::fs::read(temp.path().join("order--12345-.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(sink.written().len(), 1);
}
