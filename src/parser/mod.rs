//! CSV ingestion for the master SKU list.
//!
//! Rows deserialize straight into [`SourceRow`] by header name, so column
//! order in the file does not matter. All fields are whitespace-trimmed,
//! matching how the catalog data is hand-maintained.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{CsvError, CsvResult};
use crate::models::SourceRow;

/// Read all catalog rows from a CSV source.
///
/// The first line must be a header naming at least the columns
/// `sku`, `product_type`, `product_name`, `description` and `price`.
/// A row missing one of those columns is a [`CsvError::Parse`].
pub fn read_rows<R: Read>(reader: R) -> CsvResult<Vec<SourceRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: SourceRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read all catalog rows from a CSV file.
///
/// A missing file is reported as [`CsvError::SourceNotFound`] carrying
/// the path, distinct from other io failures.
pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> CsvResult<Vec<SourceRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CsvError::SourceNotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    read_rows(file)
}
