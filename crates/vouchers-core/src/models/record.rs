//! Voucher row data models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names kept from the pasted table.
pub const ORDER_NO_COLUMN: &str = "Order No";
pub const CONTACT_COLUMN: &str = "Contact";
pub const VOUCHER_COLUMN: &str = "Voucher";
pub const VOUCHER_GIVEN_COLUMN: &str = "Voucher Given";

/// One data line as read from the input, all cells as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based line number in the source text (header is line 1).
    pub line: usize,

    /// `Order No` cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,

    /// `Contact` cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    /// `Voucher` cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher: Option<String>,

    /// `Voucher Given` cell, when the column exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_given: Option<String>,
}

impl RawRow {
    /// Order number trimmed, or empty.
    pub fn order_no_trimmed(&self) -> &str {
        self.order_no.as_deref().map(str::trim).unwrap_or("")
    }

    /// Contact trimmed, or empty.
    pub fn contact_trimmed(&self) -> &str {
        self.contact.as_deref().map(str::trim).unwrap_or("")
    }

    /// Voucher cell trimmed, or empty.
    pub fn voucher_trimmed(&self) -> &str {
        self.voucher.as_deref().map(str::trim).unwrap_or("")
    }
}

/// A validated voucher row ready for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherRecord {
    /// Source line number.
    pub line: usize,

    /// Order identifier (trimmed, non-empty).
    pub order_id: String,

    /// Normalized contact number.
    pub contact: String,

    /// Voucher amount in whole currency units.
    pub amount: u32,
}

/// Why a row was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueReason {
    /// Voucher amount missing or not a whole number.
    InvalidVoucher,
    /// Order number missing or blank.
    MissingOrderId,
    /// Contact shared with another row.
    DuplicateContact,
}

impl IssueReason {
    /// Blocking reasons keep a row out of the document; the rest are warnings.
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::InvalidVoucher | Self::MissingOrderId)
    }

    /// Heading used when listing rows for an operator.
    pub fn label(self) -> &'static str {
        match self {
            Self::InvalidVoucher => "Invalid Voucher",
            Self::MissingOrderId => "Missing Order ID",
            Self::DuplicateContact => "Duplicate Contact",
        }
    }
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A flagged row and the reason it was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    /// Reason category.
    pub reason: IssueReason,

    /// The row as parsed, contact already normalized.
    pub row: RawRow,
}
