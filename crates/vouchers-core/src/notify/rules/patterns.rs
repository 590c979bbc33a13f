//! Common regex patterns for voucher rows and validity dates.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "<order word> <contact digits>" as joined for a member line
    pub static ref ORDER_CONTACT: Regex = Regex::new(
        r"^(\w+)\s+(\d+)$"
    ).unwrap();

    // Calendar pick: DD/MM/YYYY
    pub static ref PICKED_DATE: Regex = Regex::new(
        r"^(\d{1,2})/(\d{1,2})/(\d{4})$"
    ).unwrap();

    // Display form: "25 December"
    pub static ref DISPLAY_DATE: Regex = Regex::new(
        r"^(\d{1,2})\s+([A-Za-z]+)$"
    ).unwrap();

    // Sheet cells, day first: DD/MM/YYYY, DD-MM-YY, DD.MM.YYYY, optional time after
    pub static ref SHEET_DATE_DMY: Regex = Regex::new(
        r"^(\d{1,2})[./\-](\d{1,2})[./\-](\d{4}|\d{2})\b"
    ).unwrap();

    // Sheet cells, ISO: YYYY-MM-DD
    pub static ref SHEET_DATE_YMD: Regex = Regex::new(
        r"^(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})\b"
    ).unwrap();

    pub static ref DIGITS_ONLY: Regex = Regex::new(
        r"^\d+$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_contact_shape() {
        let caps = ORDER_CONTACT.captures("A100 01711111111").unwrap();
        assert_eq!(&caps[1], "A100");
        assert_eq!(&caps[2], "01711111111");

        assert!(!ORDER_CONTACT.is_match("ORD-1 01711111111"));
        assert!(!ORDER_CONTACT.is_match("A100 "));
    }

    #[test]
    fn test_sheet_date_patterns() {
        assert!(SHEET_DATE_DMY.is_match("25/12/2025 10:15:00"));
        assert!(SHEET_DATE_DMY.is_match("5-1-26"));
        assert!(SHEET_DATE_YMD.is_match("2025-12-25"));
        assert!(!SHEET_DATE_DMY.is_match("Dec 25"));
    }
}
