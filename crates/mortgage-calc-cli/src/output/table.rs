use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::result_rows;

/// Field/value table of the result, then warnings and methodology.
pub fn print_table(value: &Value) {
    println!("{}", build_table(value));

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for warning in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", warning);
            }
        }
    }

    if let Some(Value::String(methodology)) = value.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn build_table(value: &Value) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, val) in result_rows(value) {
        builder.push_record([field, val]);
    }
    builder.build()
}
