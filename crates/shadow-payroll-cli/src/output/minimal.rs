use serde_json::Value;

use super::format_value;

/// Print just the headline answer from a command's output.
///
/// compare: the narrative summary sentence; pe-risk: the risk level;
/// base-calc: the gross monthly amount; normalize: the bucket total.
pub fn print_minimal(value: &Value) {
    if let Some(Value::String(text)) = value.get("summary").and_then(|s| s.get("text")) {
        println!("{}", text);
        return;
    }

    let priority_keys = ["level", "gross_monthly_local", "total_usd"];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_value(val));
                    return;
                }
            }
        }

        // Fall back to the first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_value(val));
            return;
        }
    }

    println!("{}", format_value(value));
}
