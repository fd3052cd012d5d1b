// src/import/csv.rs

use crate::core::PrettyTable;
use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

/// Load a CSV file into `table`: first record = headers, others = rows.
pub fn load_csv(table: &mut PrettyTable, path: &Path) -> AppResult<()> {
    let data = std::fs::read(path)?;
    load_csv_from_reader(table, data.as_slice())
}

/// Same as [`load_csv`] on any reader.
///
/// Rows are inserted one by one; on a failing row the rows before it stay
/// in the table and the error carries the 1-based source line.
pub fn load_csv_from_reader<R: Read>(table: &mut PrettyTable, reader: R) -> AppResult<()> {
    let records = parse_records(reader)?;

    let Some((header, body)) = records.split_first() else {
        return Err(AppError::EmptyInput("CSV file contains no data".into()));
    };

    table
        .set_columns(header.record.iter())
        .map_err(|e| AppError::at_line(header.line, e))?;

    for rec in body {
        table
            .add_row(rec.record.iter())
            .map_err(|e| AppError::at_line(rec.line, e))?;
    }

    Ok(())
}

struct LineRecord {
    line: u64,
    record: StringRecord,
}

fn parse_records<R: Read>(reader: R) -> AppResult<Vec<LineRecord>> {
    // flexible: arity mismatches are reported by the table, not by the parser
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record =
            result.map_err(|e| AppError::Parse(format!("Failed to parse CSV data: {e}")))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);
        records.push(LineRecord { line, record });
    }

    Ok(records)
}
