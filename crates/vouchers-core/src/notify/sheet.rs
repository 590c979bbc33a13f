//! Rows from a published spreadsheet CSV export.
//!
//! The first column holds the date a voucher row was logged. Only rows
//! whose day and month match the requested day are kept; the year is not
//! compared.

use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use tracing::debug;

use super::rules::{display_date, parse_sheet_date};
use super::table::{ColumnMap, ParsedTable, is_blank};
use crate::error::{InputError, Result, VoucherError};

/// Parse the export and keep the rows logged on `day`.
pub fn rows_for_day(csv_text: &str, day: NaiveDate) -> Result<ParsedTable> {
    let trimmed = csv_text.trim();
    if trimmed.is_empty() {
        return Err(InputError::NoDataProvided.into());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(trimmed.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| InputError::Malformed(e.to_string()))?
        .clone();
    let (columns, dropped_columns) = ColumnMap::locate(&headers)?;

    let mut rows = Vec::new();
    let mut scanned = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| InputError::Malformed(e.to_string()))?;
        if is_blank(&record) {
            continue;
        }
        scanned += 1;

        let logged = record.get(0).and_then(parse_sheet_date);
        if !logged.is_some_and(|d| d.day() == day.day() && d.month() == day.month()) {
            continue;
        }

        let line = record.position().map(|p| p.line() as usize).unwrap_or(scanned + 1);
        rows.push(columns.row(&record, line));
    }

    debug!("Sheet rows for {}: {} of {}", day, rows.len(), scanned);

    if rows.is_empty() {
        return Err(VoucherError::Sheet(format!(
            "no matching records found for '{}'",
            display_date(day)
        )));
    }

    Ok(ParsedTable {
        rows,
        has_issuance_column: columns.has_issuance_column(),
        dropped_columns,
    })
}
