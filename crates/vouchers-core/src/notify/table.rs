//! Row parser for pasted tab-separated tables.
//!
//! The first non-empty line must be a header row. Only the `Order No`,
//! `Contact`, `Voucher` and `Voucher Given` columns are kept; everything
//! else is dropped. Cells stay text, no type inference happens here.

use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::debug;

use crate::error::InputError;
use crate::models::config::ParserConfig;
use crate::models::record::{
    CONTACT_COLUMN, ORDER_NO_COLUMN, RawRow, VOUCHER_COLUMN, VOUCHER_GIVEN_COLUMN,
};

/// Rows read from the input, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTable {
    /// Data rows.
    pub rows: Vec<RawRow>,

    /// Whether a `Voucher Given` column was present.
    pub has_issuance_column: bool,

    /// Header cells that were not kept.
    pub dropped_columns: Vec<String>,
}

/// Positions of the kept columns within a header record.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnMap {
    order_no: usize,
    contact: usize,
    voucher: usize,
    voucher_given: Option<usize>,
}

impl ColumnMap {
    /// Locate the kept columns, failing on the first missing required one.
    pub(crate) fn locate(headers: &StringRecord) -> Result<(Self, Vec<String>), InputError> {
        let find = |name: &str| headers.iter().position(|h| header_matches(h, name));
        let require = |name: &str| {
            find(name).ok_or_else(|| InputError::MissingColumn(name.to_string()))
        };

        let map = Self {
            order_no: require(ORDER_NO_COLUMN)?,
            contact: require(CONTACT_COLUMN)?,
            voucher: require(VOUCHER_COLUMN)?,
            voucher_given: find(VOUCHER_GIVEN_COLUMN),
        };

        let dropped = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !map.keeps(*i))
            .map(|(_, h)| clean_header(h))
            .collect();

        Ok((map, dropped))
    }

    fn keeps(&self, index: usize) -> bool {
        index == self.order_no
            || index == self.contact
            || index == self.voucher
            || Some(index) == self.voucher_given
    }

    pub(crate) fn has_issuance_column(&self) -> bool {
        self.voucher_given.is_some()
    }

    /// Build a row from a record. Absent cells become `None`.
    pub(crate) fn row(&self, record: &StringRecord, line: usize) -> RawRow {
        let cell = |i: usize| record.get(i).map(str::to_string);
        RawRow {
            line,
            order_no: cell(self.order_no),
            contact: cell(self.contact),
            voucher: cell(self.voucher),
            voucher_given: self.voucher_given.and_then(cell),
        }
    }
}

/// Parse pasted tab-separated text into rows.
///
/// Leading blank lines are skipped. The header line is used exactly as
/// pasted, so an empty first header cell keeps its column. Quotes are
/// ordinary characters.
pub fn parse_table(text: &str, config: &ParserConfig) -> Result<ParsedTable, InputError> {
    let (skipped, body) = skip_blank_lines(text);
    if body.trim().is_empty() {
        return Err(InputError::NoDataProvided);
    }

    let first_line = body.lines().next().unwrap_or_default();
    if !looks_like_header(first_line, &config.header_keywords) {
        return Err(InputError::HeadersNotFound);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| InputError::Malformed(e.to_string()))?
        .clone();
    let (columns, dropped_columns) = ColumnMap::locate(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| InputError::Malformed(e.to_string()))?;
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map(|p| p.line() as usize).unwrap_or(rows.len() + 2);
        rows.push(columns.row(&record, line + skipped));
    }

    debug!(
        "Parsed {} rows, dropped columns: {:?}",
        rows.len(),
        dropped_columns
    );

    Ok(ParsedTable {
        rows,
        has_issuance_column: columns.has_issuance_column(),
        dropped_columns,
    })
}

/// Header heuristic: the line contains any keyword, case-insensitively.
pub fn looks_like_header(line: &str, keywords: &[String]) -> bool {
    let lower = line.to_lowercase();
    keywords.iter().any(|k| lower.contains(&k.to_lowercase()))
}

/// Count and drop whitespace-only lines before the first line with content.
fn skip_blank_lines(text: &str) -> (usize, &str) {
    let mut skipped = 0;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        skipped += 1;
        offset += line.len();
    }
    (skipped, &text[offset..])
}

pub(crate) fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|f| f.trim().is_empty())
}

fn clean_header(header: &str) -> String {
    header.replace('\u{feff}', "").trim().to_string()
}

fn header_matches(header: &str, name: &str) -> bool {
    clean_header(header).eq_ignore_ascii_case(name)
}
