//! Configuration structures for the notification pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::VoucherError;

/// Header keywords recognised in the first line of pasted input.
pub const DEFAULT_HEADER_KEYWORDS: &[&str] =
    &["order no", "contact", "voucher", "date", "ticket no", "ticket id"];

/// Main configuration for the vouchers pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoucherConfig {
    /// Row parsing configuration.
    pub parser: ParserConfig,

    /// Row validation configuration.
    pub validation: ValidationConfig,

    /// Notification text configuration.
    pub notification: NotificationConfig,

    /// Output file configuration.
    pub output: OutputConfig,

    /// Published spreadsheet source.
    pub sheet: SheetConfig,
}

/// Row parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Lower-case keywords; the first line is a header if it contains any of them.
    pub header_keywords: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_keywords: DEFAULT_HEADER_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// Row validator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Expected contact length; contacts exactly one digit short get a leading zero.
    pub contact_length: usize,

    /// `Voucher Given` values (normalized) that exclude a row entirely.
    pub issued_markers: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            contact_length: 10,
            issued_markers: vec!["yes".to_string(), "withdrawn".to_string()],
        }
    }
}

/// Text used when rendering notification segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Coupon code prefix; the amount is appended.
    pub coupon_prefix: String,

    /// Added to the voucher amount to get the minimum order value.
    pub minimum_order_surcharge: u32,

    /// Currency word used in the message body.
    pub currency: String,

    /// First line of the document.
    pub preamble: String,

    /// Closing line of every segment.
    pub disclaimer: String,

    /// Separator placed between order id and contact.
    pub contact_separator: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            coupon_prefix: "SORRY".to_string(),
            minimum_order_surcharge: 49,
            currency: "taka".to_string(),
            preamble: "Need to send notification for the coupon list below:".to_string(),
            disclaimer: "Not applicable for Flat discount-providing restaurants".to_string(),
            contact_separator: "\u{00a0}\u{00a0}\u{00a0}".to_string(),
        }
    }
}

/// Where and how the document is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory (None = Desktop, then current directory).
    pub directory: Option<PathBuf>,

    /// Session used when none is given on the command line.
    pub default_session: crate::notify::report::Session,
}

/// Published spreadsheet export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Spreadsheet document id.
    pub sheet_id: Option<String>,

    /// Worksheet id within the document.
    pub gid: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet_id: None,
            gid: "0".to_string(),
        }
    }
}

impl SheetConfig {
    /// CSV export URL of the configured worksheet.
    pub fn export_url(&self) -> Option<String> {
        self.sheet_id.as_ref().map(|id| {
            format!(
                "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
                id, self.gid
            )
        })
    }
}

impl VoucherConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, VoucherError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| VoucherError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), VoucherError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| VoucherError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
