//! Validity date parsing and display formatting.

use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;
use tracing::warn;

use super::patterns::{DISPLAY_DATE, PICKED_DATE, SHEET_DATE_DMY, SHEET_DATE_YMD};
use crate::error::DateError;

/// Parse a calendar pick in `DD/MM/YYYY` form.
pub fn parse_picked_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    let invalid = || DateError::InvalidDate(input.to_string());

    let caps = PICKED_DATE.captures(trimmed).ok_or_else(invalid)?;
    let day: u32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let year: i32 = caps[3].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Display form: day without leading zero and the full month name ("5 January").
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d %B").to_string()
}

/// `DD/MM/YYYY` straight to display form.
pub fn format_date(input: &str) -> Result<String, DateError> {
    parse_picked_date(input).map(display_date)
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Turn a display string ("25 December") into its ordinal form ("25th December").
pub fn ordinal_from_display(display: &str) -> Result<String, DateError> {
    let invalid = || DateError::InvalidDate(display.to_string());

    let caps = DISPLAY_DATE.captures(display.trim()).ok_or_else(invalid)?;
    let day: u32 = caps[1].parse().map_err(|_| invalid())?;
    if !(1..=31).contains(&day) {
        return Err(invalid());
    }
    let month: Month = caps[2].parse().map_err(|_| invalid())?;

    Ok(format!("{}{} {}", day, ordinal_suffix(day), month.name()))
}

/// Ordinal form of a date ("1st January").
pub fn ordinal_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{}{} {}", day, ordinal_suffix(day), date.format("%B"))
}

/// Parse a spreadsheet date cell, day first. Any trailing time is ignored.
pub fn parse_sheet_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();

    if let Some(caps) = SHEET_DATE_YMD.captures(cell) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let caps = SHEET_DATE_DMY.captures(cell)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = parse_year(&caps[3]);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

/// The start and end of a voucher's validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidityRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl ValidityRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            warn!("Validity starts ({}) after it ends ({})", start, end);
        }
        Self { start, end }
    }

    /// Build from two `DD/MM/YYYY` strings.
    pub fn from_input(start: &str, end: &str) -> Result<Self, DateError> {
        Ok(Self::new(parse_picked_date(start)?, parse_picked_date(end)?))
    }

    pub fn display_start(&self) -> String {
        display_date(self.start)
    }

    pub fn display_end(&self) -> String {
        display_date(self.end)
    }

    pub fn ordinal_start(&self) -> String {
        ordinal_date(self.start)
    }

    pub fn ordinal_end(&self) -> String {
        ordinal_date(self.end)
    }

    /// "1st January to 5th January".
    pub fn ordinal_span(&self) -> String {
        format!("{} to {}", self.ordinal_start(), self.ordinal_end())
    }
}
