//! End-to-end generation pipeline.
//!
//! Every run starts from fresh input. Restarting means calling it again.

use tracing::{info, warn};

use super::report::{NotificationDocument, Session, assemble, output_file_name};
use super::rules::ValidityRange;
use super::segments::SegmentBuilder;
use super::table::{ParsedTable, parse_table};
use super::validate::{RowValidator, ValidationReport};
use crate::error::{Result, VoucherError};
use crate::models::config::VoucherConfig;
use crate::models::record::IssueReason;

/// What to do when rows share a contact number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Include every row anyway.
    Proceed,
    /// Refuse to generate.
    #[default]
    Abort,
}

/// Parse, validate and render voucher notifications.
pub struct Pipeline {
    config: VoucherConfig,
}

impl Pipeline {
    pub fn new(config: VoucherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VoucherConfig {
        &self.config
    }

    /// Parse pasted text and validate its rows.
    pub fn prepare(&self, input: &str) -> Result<ValidationReport> {
        let table = parse_table(input, &self.config.parser)?;
        Ok(self.validate(&table))
    }

    /// Validate rows from any source.
    pub fn validate(&self, table: &ParsedTable) -> ValidationReport {
        RowValidator::new(self.config.validation.clone()).validate(table)
    }

    /// Build the document from a validation report.
    pub fn generate(
        &self,
        report: &ValidationReport,
        range: &ValidityRange,
        session: Session,
        duplicates: DuplicatePolicy,
    ) -> Result<NotificationDocument> {
        if report.is_blocked() {
            return Err(VoucherError::Rejected {
                invalid_vouchers: report.count(IssueReason::InvalidVoucher),
                missing_order_ids: report.count(IssueReason::MissingOrderId),
            });
        }

        if report.has_warnings() {
            let count = report.warnings.len();
            match duplicates {
                DuplicatePolicy::Abort => return Err(VoucherError::DuplicatesNotAccepted(count)),
                DuplicatePolicy::Proceed => warn!("Proceeding with {} duplicate-contact rows", count),
            }
        }

        if report.valid.is_empty() {
            return Err(VoucherError::NoValidEntries);
        }

        let notification = &self.config.notification;
        let segments = SegmentBuilder::new(notification).build(&report.valid, range);
        let body = assemble(&segments, notification);
        let file_name = output_file_name(session, range);

        info!(
            "Generated {} segments for {} rows ({})",
            segments.len(),
            report.valid.len(),
            file_name
        );

        Ok(NotificationDocument {
            file_name,
            body,
            segments,
        })
    }

    /// Parse, validate and generate in one call.
    pub fn run(
        &self,
        input: &str,
        start: &str,
        end: &str,
        session: Session,
        duplicates: DuplicatePolicy,
    ) -> Result<NotificationDocument> {
        let report = self.prepare(input)?;
        let range = ValidityRange::from_input(start, end)?;
        self.generate(&report, &range, session, duplicates)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(VoucherConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DateError, InputError};
    use pretty_assertions::assert_eq;

    const INPUT: &str = "Order No\tContact\tVoucher\n\
                         A100\t01711111111\t50\n\
                         A101\t01722222222\t50\n\
                         A102\t01733333333\t100\n";

    #[test]
    fn test_end_to_end() {
        let doc = Pipeline::default()
            .run(INPUT, "01/01/2026", "05/01/2026", Session::Evening, DuplicatePolicy::Abort)
            .unwrap();

        assert_eq!(doc.file_name, "Evening_1_January_to_5_January.txt");
        assert_eq!(doc.segments.len(), 2);

        let first = &doc.segments[0];
        assert_eq!((first.serial, first.coupon_code.as_str()), (1, "SORRY50"));
        assert_eq!(first.members.len(), 2);
        assert_eq!(first.minimum_order, 99);

        let second = &doc.segments[1];
        assert_eq!((second.serial, second.coupon_code.as_str()), (2, "SORRY100"));
        assert_eq!(second.members.len(), 1);
        assert_eq!(second.minimum_order, 149);

        let expected = "Need to send notification for the coupon list below:\n\
                        \n\
                        1. SORRY50\n\
                        \n\
                        A100\u{a0}\u{a0}\u{a0}01711111111\n\
                        A101\u{a0}\u{a0}\u{a0}01722222222\n\
                        \n\
                        Use coupon SORRY50 to get 50 taka off\n\
                        Minimum order: 99 taka\n\
                        Validity: 1st January to 5th January\n\
                        Not applicable for Flat discount-providing restaurants\n\
                        \n\
                        \n\
                        2. SORRY100\n\
                        \n\
                        A102\u{a0}\u{a0}\u{a0}01733333333\n\
                        \n\
                        Use coupon SORRY100 to get 100 taka off\n\
                        Minimum order: 149 taka\n\
                        Validity: 1st January to 5th January\n\
                        Not applicable for Flat discount-providing restaurants\n";
        assert_eq!(doc.body, expected);
    }

    #[test]
    fn test_input_errors() {
        let pipeline = Pipeline::default();
        assert!(matches!(
            pipeline.prepare("   "),
            Err(VoucherError::Input(InputError::NoDataProvided))
        ));
        assert!(matches!(
            pipeline.prepare("A100\t0171\t50"),
            Err(VoucherError::Input(InputError::HeadersNotFound))
        ));
    }

    #[test]
    fn test_invalid_date() {
        let err = Pipeline::default()
            .run(INPUT, "32/01/2026", "05/01/2026", Session::Morning, DuplicatePolicy::Abort)
            .unwrap_err();
        assert!(matches!(err, VoucherError::Date(DateError::InvalidDate(d)) if d == "32/01/2026"));
    }

    #[test]
    fn test_blocking_issues_reject_the_batch() {
        let input = "Order No\tContact\tVoucher\n\
                     A100\t01711111111\t50\n\
                     \t01722222222\t50\n\
                     A102\t01733333333\tn/a\n";

        let err = Pipeline::default()
            .run(input, "01/01/2026", "05/01/2026", Session::Evening, DuplicatePolicy::Proceed)
            .unwrap_err();

        assert!(matches!(
            err,
            VoucherError::Rejected { invalid_vouchers: 1, missing_order_ids: 1 }
        ));
    }

    #[test]
    fn test_duplicates_follow_policy() {
        let input = "Order No\tContact\tVoucher\n\
                     A100\t01711111111\t50\n\
                     A101\t01711111111\t100\n";
        let pipeline = Pipeline::default();
        let report = pipeline.prepare(input).unwrap();
        let range = ValidityRange::from_input("01/01/2026", "05/01/2026").unwrap();

        let err = pipeline
            .generate(&report, &range, Session::Evening, DuplicatePolicy::Abort)
            .unwrap_err();
        assert!(matches!(err, VoucherError::DuplicatesNotAccepted(2)));

        let doc = pipeline
            .generate(&report, &range, Session::Evening, DuplicatePolicy::Proceed)
            .unwrap();
        assert_eq!(doc.segments.len(), 2);
    }

    #[test]
    fn test_all_rows_issued() {
        let input = "Order No\tContact\tVoucher\tVoucher Given\n\
                     A100\t01711111111\t50\tyes\n";
        let pipeline = Pipeline::default();
        let report = pipeline.prepare(input).unwrap();
        let range = ValidityRange::from_input("01/01/2026", "05/01/2026").unwrap();

        assert_eq!(report.already_issued, 1);
        let err = pipeline
            .generate(&report, &range, Session::Evening, DuplicatePolicy::Abort)
            .unwrap_err();
        assert!(matches!(err, VoucherError::NoValidEntries));
    }
}
