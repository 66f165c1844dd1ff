//! Plain-text rendering of inputs, results and reference data.

use std::fmt::Write as _;

use freight_core::classification::reference_table;
use freight_core::density::CalculationResult;
use freight_core::loads::LoadCollection;
use freight_core::measurement::{Field, MeasurementInputs};
use freight_core::templates::QUICK_TEMPLATES;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub fn format_inputs(inputs: &MeasurementInputs) -> String {
    let units = inputs.unit_system();
    let shown = |field: Field| {
        let raw = inputs.field(field).trim();
        if raw.is_empty() {
            "-".to_string()
        } else {
            raw.to_string()
        }
    };

    format!(
        "Length: {} {} | Width: {} {} | Height: {} {} | Weight: {} {}\nUnits: {} | Palletized: {}",
        shown(Field::Length),
        units.length_label(),
        shown(Field::Width),
        units.length_label(),
        shown(Field::Height),
        units.length_label(),
        shown(Field::Weight),
        units.weight_label(),
        units,
        yes_no(inputs.palletized),
    )
}

/// Result block, or the list of fields still missing a usable value
pub fn format_result(inputs: &MeasurementInputs, result: Option<&CalculationResult>) -> String {
    match result {
        Some(result) => format!(
            "Density: {:.2} PCF\nVolume: {:.2} cu ft\nFreight Class: {}",
            result.density_pcf, result.volume_cuft, result.freight_class
        ),
        None => {
            let missing: Vec<&str> = Field::ALL
                .iter()
                .filter(|&&field| inputs.positive_value(field).is_none())
                .map(|field| field.name())
                .collect();
            format!("Incomplete: enter a positive number for {}", missing.join(", "))
        }
    }
}

pub fn format_classes() -> String {
    let mut out = String::from("Density (PCF)            Class\n");
    for row in reference_table() {
        let _ = writeln!(out, "{:<24} {}", row.density_range, row.code);
    }
    out.trim_end().to_string()
}

pub fn format_templates() -> String {
    let mut out = String::new();
    for (index, template) in QUICK_TEMPLATES.iter().enumerate() {
        let _ = writeln!(out, "{}. {:<22} {}", index + 1, template.name, template.summary());
    }
    out.trim_end().to_string()
}

pub fn format_loads(loads: &LoadCollection) -> String {
    if loads.is_empty() {
        return "No saved loads.".to_string();
    }

    let mut out = format!("Saved loads ({}):\n", loads.len());
    for record in loads {
        let _ = writeln!(
            out,
            "  [{}] {}: class {}, {:.2} PCF, {:.2} cu ft",
            record.id, record.name, record.result.freight_class, record.result.density_pcf, record.result.volume_cuft
        );
    }
    out.trim_end().to_string()
}
