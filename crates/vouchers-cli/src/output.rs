//! Terminal output for validation reports.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use console::style;

use vouchers_core::{IssueReason, RowIssue, ValidationReport};

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Row counts by category.
pub fn summary_table(report: &ValidationReport) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Data Summary", ""]);
    table.add_row(vec!["Total Rows".to_string(), report.total_rows.to_string()]);
    if report.already_issued > 0 {
        table.add_row(vec![
            "Already Issued".to_string(),
            report.already_issued.to_string(),
        ]);
    }
    table.add_row(vec!["Valid Entries".to_string(), report.valid.len().to_string()]);
    for reason in [
        IssueReason::InvalidVoucher,
        IssueReason::MissingOrderId,
        IssueReason::DuplicateContact,
    ] {
        table.add_row(vec![reason.label().to_string(), report.count(reason).to_string()]);
    }
    table
}

/// Flagged rows with their reason.
pub fn issues_table<'a>(issues: impl IntoIterator<Item = &'a RowIssue>) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Line", "Order No", "Contact", "Voucher", "Reason"]);
    for issue in issues {
        table.add_row(vec![
            issue.row.line.to_string(),
            issue.row.order_no_trimmed().to_string(),
            issue.row.contact_trimmed().to_string(),
            issue.row.voucher_trimmed().to_string(),
            issue.reason.to_string(),
        ]);
    }
    table
}

/// Rows per voucher amount.
pub fn distribution_table(report: &ValidationReport) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Voucher", "Count"]);
    for (amount, count) in report.distribution() {
        table.add_row(vec![amount.to_string(), count.to_string()]);
    }
    table
}

/// Valid rows in generation order.
pub fn valid_table(report: &ValidationReport) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Order No", "Contact", "Voucher"]);
    for record in &report.valid {
        table.add_row(vec![
            record.order_id.clone(),
            record.contact.clone(),
            record.amount.to_string(),
        ]);
    }
    table
}

/// Print the full preview of a report.
pub fn print_report(report: &ValidationReport) {
    println!("{}", summary_table(report));

    if report.considered_rows() == 0 && report.already_issued > 0 {
        println!(
            "\n{} All vouchers have already been given!",
            style("⚠").yellow()
        );
    }

    if report.issues().next().is_some() {
        println!("\n{} Invalid data preview:", style("⚠").yellow());
        println!("{}", issues_table(report.issues()));
    }

    if !report.valid.is_empty() {
        println!("\nVoucher distribution:");
        println!("{}", distribution_table(report));

        println!("\n{} Valid data preview:", style("✓").green());
        println!("{}", valid_table(report));
    }
}
