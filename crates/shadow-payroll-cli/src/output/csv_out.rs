use serde_json::Value;
use std::io;

use shadow_payroll_core::comparison::ComparisonReport;

use super::format_value;

/// Write output as CSV to stdout.
///
/// Comparison reports become the same category x scenario grid the
/// spreadsheet export uses (categories as rows, one column per scenario,
/// totals last); other outputs fall back to field/value rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Ok(report) = serde_json::from_value::<ComparisonReport>(value.clone()) {
        write_comparison_csv(&mut wtr, &report);
        let _ = wtr.flush();
        return;
    }

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(buckets)) = map.get("buckets") {
                // Normalization output: one row per canonical bucket.
                write_array_csv(&mut wtr, buckets);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_comparison_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, report: &ComparisonReport) {
    let mut header = vec!["cost_category".to_string()];
    header.extend(report.scenario_names.iter().cloned());
    let _ = wtr.write_record(&header);

    for (label_idx, label) in report.labels.iter().enumerate() {
        let mut record = vec![label.to_string()];
        for row in &report.matrix {
            record.push(row[label_idx].to_string());
        }
        let _ = wtr.write_record(&record);
    }

    let mut totals = vec!["Total Employer Cost".to_string()];
    for total in &report.judgment.totals {
        totals.push(total.to_string());
    }
    let _ = wtr.write_record(&totals);
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let record: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&record);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_value(item)]);
        }
    }
}
