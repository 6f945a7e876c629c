use std::path::Path;

use crate::error::{Error, Result};
use crate::table::{Table, Value};

/// Writes the table as a CSV file: header row first, records in insertion
/// order. Any existing file at `path` is fully replaced.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.fields())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    debug!("Wrote {} records to {}", table.len(), path.display());
    Ok(())
}

/// Loads a table from a CSV file written by `write_csv` (or by hand). The
/// header must contain every field in `expected`; numeric-looking cells are
/// coerced to numbers.
pub fn read_csv(path: &Path, expected: &[&str]) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    for field in expected {
        if !headers.iter().any(|h| h == field) {
            return Err(Error::DataFormat(format!(
                "{}: missing expected field '{}'",
                path.display(),
                field
            )));
        }
    }
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table")
        .to_string();
    let fields: Vec<&str> = headers.iter().map(String::as_str).collect();
    let mut table = Table::new(&name, &fields);
    for record in reader.records() {
        let record = record?;
        table.push(record.iter().map(Value::parse).collect())?;
    }
    debug!("Read {} records from {}", table.len(), path.display());
    Ok(table)
}
