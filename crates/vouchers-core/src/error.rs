//! Error types for the vouchers-core library.

use thiserror::Error;

/// Main error type for the vouchers library.
#[derive(Error, Debug)]
pub enum VoucherError {
    /// Pasted input could not be turned into rows.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// A validity date could not be parsed.
    #[error("date error: {0}")]
    Date(#[from] DateError),

    /// One or more rows carry a blocking validation issue.
    #[error(
        "validation failed: {invalid_vouchers} invalid voucher(s), {missing_order_ids} missing order id(s)"
    )]
    Rejected {
        invalid_vouchers: usize,
        missing_order_ids: usize,
    },

    /// Duplicate contacts were found and the caller chose not to proceed.
    #[error("{0} row(s) share a contact number with another row")]
    DuplicatesNotAccepted(usize),

    /// Nothing is left to notify after filtering and validation.
    #[error("no valid entries found")]
    NoValidEntries,

    /// Published spreadsheet export could not be used.
    #[error("sheet error: {0}")]
    Sheet(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while reading pasted tabular text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The text was empty after trimming.
    #[error("no data provided")]
    NoDataProvided,

    /// The first line does not look like a header row.
    #[error("headers not found in the first line")]
    HeadersNotFound,

    /// A required column is absent from the header row.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// The text could not be split into records.
    #[error("malformed input: {0}")]
    Malformed(String),
}

/// Errors raised while handling validity dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Not a valid `DD/MM/YYYY` calendar date or `<day> <Month>` display string.
    #[error("invalid date: '{0}'")]
    InvalidDate(String),
}

/// Result type for the vouchers library.
pub type Result<T> = std::result::Result<T, VoucherError>;
