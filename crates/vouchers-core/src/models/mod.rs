//! Data models shared across the pipeline.

pub mod config;
pub mod record;

pub use config::VoucherConfig;
pub use record::{IssueReason, RawRow, RowIssue, VoucherRecord};
