//! Notification segment building and rendering.

use serde::Serialize;

use super::rules::patterns::ORDER_CONTACT;
use super::rules::{ValidityRange, minimum_order_value};
use crate::models::config::NotificationConfig;
use crate::models::record::VoucherRecord;

/// A member row of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentMember {
    pub order_id: String,
    pub contact: String,
}

/// One text block of the document, covering a single voucher amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationSegment {
    /// 1-based position in ascending amount order.
    pub serial: usize,

    /// Voucher amount shared by every member.
    pub amount: u32,

    /// Coupon code, e.g. `SORRY50`.
    pub coupon_code: String,

    /// Members in input order.
    pub members: Vec<SegmentMember>,

    /// Amount plus the configured surcharge.
    pub minimum_order: u32,

    /// Ordinal start date, e.g. `1st January`.
    pub valid_from: String,

    /// Ordinal end date.
    pub valid_until: String,
}

impl NotificationSegment {
    /// Member lines with order id and contact rejoined by the configured separator.
    pub fn member_lines(&self, separator: &str) -> Vec<String> {
        self.members
            .iter()
            .map(|m| format_order_contact(&format!("{} {}", m.order_id, m.contact), separator))
            .collect()
    }

    /// Render the block as it appears in the document.
    pub fn render(&self, config: &NotificationConfig) -> String {
        let mut lines = vec![format!("{}. {}\n", self.serial, self.coupon_code)];
        lines.extend(self.member_lines(&config.contact_separator));
        lines.push(format!(
            "\nUse coupon {} to get {} {} off",
            self.coupon_code, self.amount, config.currency
        ));
        lines.push(format!("Minimum order: {} {}", self.minimum_order, config.currency));
        lines.push(format!("Validity: {} to {}", self.valid_from, self.valid_until));
        lines.push(format!("{}\n", config.disclaimer));
        lines.join("\n")
    }
}

/// Rejoin a `"<order> <contact>"` line; lines of any other shape pass through.
pub fn format_order_contact(line: &str, separator: &str) -> String {
    match ORDER_CONTACT.captures(line) {
        Some(caps) => format!("{}{}{}", &caps[1], separator, &caps[2]),
        None => line.to_string(),
    }
}

/// Groups valid records into segments.
pub struct SegmentBuilder<'a> {
    config: &'a NotificationConfig,
}

impl<'a> SegmentBuilder<'a> {
    pub fn new(config: &'a NotificationConfig) -> Self {
        Self { config }
    }

    /// One segment per distinct amount, ascending.
    ///
    /// Records are stable-sorted first, so callers may pass them in any order.
    pub fn build(&self, records: &[VoucherRecord], range: &ValidityRange) -> Vec<NotificationSegment> {
        let mut sorted: Vec<&VoucherRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.amount);

        let valid_from = range.ordinal_start();
        let valid_until = range.ordinal_end();

        let mut segments: Vec<NotificationSegment> = Vec::new();
        for record in sorted {
            let member = SegmentMember {
                order_id: record.order_id.clone(),
                contact: record.contact.clone(),
            };

            if let Some(segment) = segments.last_mut().filter(|s| s.amount == record.amount) {
                segment.members.push(member);
                continue;
            }

            segments.push(NotificationSegment {
                serial: segments.len() + 1,
                amount: record.amount,
                coupon_code: format!("{}{}", self.config.coupon_prefix, record.amount),
                members: vec![member],
                minimum_order: minimum_order_value(record.amount, self.config.minimum_order_surcharge),
                valid_from: valid_from.clone(),
                valid_until: valid_until.clone(),
            });
        }

        segments
    }
}
