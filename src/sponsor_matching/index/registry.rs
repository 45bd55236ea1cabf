//! Reading the sponsor register CSV export into rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use indexmap::IndexMap;

/// One registry record: column name to raw cell value, in header order.
pub type RegistryRow = IndexMap<String, String>;

const UTF8_BOM: char = '\u{feff}';

/// Read every record of a registry CSV file.
pub fn read_registry_csv(path: &Path) -> Result<Vec<RegistryRow>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open registry CSV {:?}", path))?;
    read_registry_from_reader(file).with_context(|| format!("Failed to parse registry CSV {:?}", path))
}

/// Read registry records from any CSV source.
///
/// The first record is the header row. Records may be shorter or longer than
/// the header: missing cells are absent from the row and extra cells are
/// dropped. Blank lines are skipped.
pub fn read_registry_from_reader<R: Read>(reader: R) -> Result<Vec<RegistryRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let header = if i == 0 {
                header.trim_start_matches(UTF8_BOM)
            } else {
                header
            };
            header.to_string()
        })
        .collect();

    let mut rows = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed CSV record {}", line + 1))?;
        let row: RegistryRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
