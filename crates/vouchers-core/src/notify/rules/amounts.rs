//! Voucher amount parsing.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Parse a voucher cell into a whole, non-negative amount.
///
/// `"50"` and `"50.0"` both give 50. Blank, negative, fractional and
/// non-numeric values give `None`.
pub fn parse_voucher_amount(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    let amount = Decimal::from_str(trimmed).ok()?;
    if amount.is_sign_negative() || !amount.fract().is_zero() {
        return None;
    }

    amount.to_u32()
}

/// Minimum order value for a voucher amount.
pub fn minimum_order_value(amount: u32, surcharge: u32) -> u32 {
    amount.saturating_add(surcharge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_amounts() {
        assert_eq!(parse_voucher_amount("50"), Some(50));
        assert_eq!(parse_voucher_amount(" 100 "), Some(100));
        assert_eq!(parse_voucher_amount("50.0"), Some(50));
        assert_eq!(parse_voucher_amount("0"), Some(0));
    }

    #[test]
    fn test_parse_rejects_invalid_amounts() {
        assert_eq!(parse_voucher_amount(""), None);
        assert_eq!(parse_voucher_amount("   "), None);
        assert_eq!(parse_voucher_amount("fifty"), None);
        assert_eq!(parse_voucher_amount("50tk"), None);
        assert_eq!(parse_voucher_amount("-50"), None);
        assert_eq!(parse_voucher_amount("49.5"), None);
    }

    #[test]
    fn test_minimum_order_value() {
        assert_eq!(minimum_order_value(50, 49), 99);
        assert_eq!(minimum_order_value(100, 49), 149);
        assert_eq!(minimum_order_value(u32::MAX, 49), u32::MAX);
    }
}
