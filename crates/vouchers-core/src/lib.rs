//! Core library for voucher notification text generation.
//!
//! This crate provides:
//! - Parsing of pasted tab-separated voucher tables
//! - Row validation (issuance filter, invalid amounts, missing orders, duplicate contacts)
//! - Validity date formatting with English ordinals
//! - Grouping into per-amount notification segments and document assembly

pub mod error;
pub mod models;
pub mod notify;

pub use error::{DateError, InputError, Result, VoucherError};
pub use models::config::VoucherConfig;
pub use models::record::{IssueReason, RawRow, RowIssue, VoucherRecord};
pub use notify::{
    DuplicatePolicy, NotificationDocument, NotificationSegment, ParsedTable, Pipeline,
    Session, ValidationReport, ValidityRange,
};
