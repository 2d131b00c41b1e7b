use serde_json::Value;
use std::io::{self, Write};

use super::result_rows;

/// Write the result as two-column `field,value` CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_csv<W: Write>(writer: W, value: &Value) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["field", "value"])?;
    for (field, val) in result_rows(value) {
        wtr.write_record([field, val])?;
    }
    wtr.flush()?;
    Ok(())
}
