//! Row validation: issuance pre-filter, blocking checks and duplicate warnings.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use super::rules::{is_already_issued, normalize_contact, parse_voucher_amount};
use super::table::ParsedTable;
use crate::models::config::ValidationConfig;
use crate::models::record::{IssueReason, RawRow, RowIssue, VoucherRecord};

/// Outcome of validating a parsed table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Data rows in the input, before any filtering.
    pub total_rows: usize,

    /// Rows dropped because their voucher was already given or withdrawn.
    pub already_issued: usize,

    /// Valid records, stable-sorted ascending by amount.
    pub valid: Vec<VoucherRecord>,

    /// Issues that keep a row out of the document.
    pub blocking: Vec<RowIssue>,

    /// Advisory issues; affected rows remain in `valid`.
    pub warnings: Vec<RowIssue>,
}

impl ValidationReport {
    /// Rows considered after the issuance pre-filter.
    pub fn considered_rows(&self) -> usize {
        self.total_rows - self.already_issued
    }

    pub fn is_blocked(&self) -> bool {
        !self.blocking.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of issues with the given reason.
    pub fn count(&self, reason: IssueReason) -> usize {
        self.issues().filter(|i| i.reason == reason).count()
    }

    /// All issues, ordered by reason category then source line.
    pub fn issues(&self) -> impl Iterator<Item = &RowIssue> {
        self.blocking.iter().chain(self.warnings.iter())
    }

    /// Rows per voucher amount among valid records, ascending by amount.
    pub fn distribution(&self) -> Vec<(u32, usize)> {
        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for record in &self.valid {
            *counts.entry(record.amount).or_default() += 1;
        }
        counts.into_iter().collect()
    }
}

/// Validates parsed rows.
pub struct RowValidator {
    config: ValidationConfig,
}

impl RowValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate every row of the table.
    pub fn validate(&self, table: &ParsedTable) -> ValidationReport {
        let total_rows = table.rows.len();

        let rows: Vec<RawRow> = table
            .rows
            .iter()
            .filter(|row| !is_already_issued(row.voucher_given.as_deref(), &self.config.issued_markers))
            .map(|row| self.normalize(row))
            .collect();

        let already_issued = total_rows - rows.len();
        if already_issued > 0 {
            debug!("Skipped {} rows already issued or withdrawn", already_issued);
        }

        let mut invalid_vouchers = Vec::new();
        let mut missing_orders = Vec::new();
        let mut valid = Vec::new();

        for row in &rows {
            let amount = parse_voucher_amount(row.voucher_trimmed());
            let order_id = row.order_no_trimmed();

            if amount.is_none() {
                invalid_vouchers.push(issue(IssueReason::InvalidVoucher, row));
            }
            if order_id.is_empty() {
                missing_orders.push(issue(IssueReason::MissingOrderId, row));
            }

            if let (Some(amount), false) = (amount, order_id.is_empty()) {
                valid.push(VoucherRecord {
                    line: row.line,
                    order_id: order_id.to_string(),
                    contact: row.contact_trimmed().to_string(),
                    amount,
                });
            }
        }

        valid.sort_by_key(|r| r.amount);

        let mut issues = invalid_vouchers;
        issues.extend(missing_orders);
        issues.extend(duplicate_contacts(&rows));
        let (blocking, warnings): (Vec<RowIssue>, Vec<RowIssue>) =
            issues.into_iter().partition(|i| i.reason.is_blocking());

        if !warnings.is_empty() {
            warn!("{} rows share a contact number with another row", warnings.len());
        }

        debug!(
            "Validated {} rows: {} valid, {} blocking, {} warnings",
            rows.len(),
            valid.len(),
            blocking.len(),
            warnings.len()
        );

        ValidationReport {
            total_rows,
            already_issued,
            valid,
            blocking,
            warnings,
        }
    }

    fn normalize(&self, row: &RawRow) -> RawRow {
        RawRow {
            contact: row
                .contact
                .as_deref()
                .map(|c| normalize_contact(c, self.config.contact_length)),
            ..row.clone()
        }
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

fn issue(reason: IssueReason, row: &RawRow) -> RowIssue {
    RowIssue {
        reason,
        row: row.clone(),
    }
}

/// Every row whose non-empty contact appears more than once, in source order.
fn duplicate_contacts(rows: &[RawRow]) -> Vec<RowIssue> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        let contact = row.contact_trimmed();
        if !contact.is_empty() {
            *seen.entry(contact).or_default() += 1;
        }
    }

    rows.iter()
        .filter(|row| seen.get(row.contact_trimmed()).is_some_and(|n| *n > 1))
        .map(|row| issue(IssueReason::DuplicateContact, row))
        .collect()
}
