pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

/// `(field, value)` rows for the `result` section of a computation envelope,
/// or for the whole value when there is no envelope.
pub(crate) fn result_rows(value: &Value) -> Vec<(String, String)> {
    let section = value.get("result").unwrap_or(value);
    match section {
        Value::Object(map) => map
            .iter()
            .map(|(key, val)| (key.clone(), render(val)))
            .collect(),
        other => vec![("value".to_string(), render(other))],
    }
}

/// Plain-text rendering of a JSON scalar; decimals arrive as strings.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
