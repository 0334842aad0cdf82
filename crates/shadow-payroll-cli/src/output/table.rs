use serde_json::Value;
use tabled::{builder::Builder, Table};

use shadow_payroll_core::comparison::ComparisonReport;
use shadow_payroll_core::Money;

use super::format_value;

/// Format output as a table using the tabled crate.
///
/// Comparison reports render as a cost-category x scenario grid with
/// low/high markers, a totals row and the narrative summary; every other
/// command output renders as a field/value listing.
pub fn print_table(value: &Value) {
    if let Ok(report) = serde_json::from_value::<ComparisonReport>(value.clone()) {
        print_comparison(&report);
        return;
    }

    match value {
        Value::Object(_) => print_flat_object(value),
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_comparison(report: &ComparisonReport) {
    let mut builder = Builder::default();

    let mut header = vec!["Cost Category".to_string()];
    header.extend(report.scenario_names.iter().cloned());
    builder.push_record(header);

    for (label_idx, label) in report.labels.iter().enumerate() {
        let extrema = &report.judgment.rows[label_idx];
        let mut record = vec![label.to_string()];
        for (scenario_idx, row) in report.matrix.iter().enumerate() {
            record.push(marked_cell(
                row[label_idx],
                scenario_idx,
                &extrema.min_indices,
                &extrema.max_indices,
            ));
        }
        builder.push_record(record);
    }

    let mut totals = vec!["Total Employer Cost".to_string()];
    for (scenario_idx, total) in report.judgment.totals.iter().enumerate() {
        totals.push(marked_cell(
            *total,
            scenario_idx,
            &report.judgment.cheapest_indices,
            &report.judgment.most_expensive_indices,
        ));
    }
    builder.push_record(totals);

    let table = Table::from(builder);
    println!("{}", table);

    if let Some(ref summary) = report.summary {
        println!("\n{}", summary.text);
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
    }
}

/// A matrix cell with its extremum marker. Ties mark every holder; rows
/// with all values equal mark nothing.
fn marked_cell(
    value: Money,
    scenario_idx: usize,
    min_indices: &[usize],
    max_indices: &[usize],
) -> String {
    let mut cell = format!("${}", value);
    if min_indices.contains(&scenario_idx) {
        cell.push_str(" (low)");
    } else if max_indices.contains(&scenario_idx) {
        cell.push_str(" (high)");
    }
    cell
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let record: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(record);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}
