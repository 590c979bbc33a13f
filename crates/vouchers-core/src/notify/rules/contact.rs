//! Contact number normalization.

use super::patterns::DIGITS_ONLY;

/// Normalize a contact number.
///
/// A value made of exactly `target_len - 1` digits gets one leading zero.
/// Everything else, including longer numbers and values with non-digit
/// characters, is returned trimmed but otherwise unchanged.
pub fn normalize_contact(raw: &str, target_len: usize) -> String {
    let trimmed = raw.trim();
    if target_len > 1 && trimmed.len() == target_len - 1 && DIGITS_ONLY.is_match(trimmed) {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_nine_digits() {
        assert_eq!(normalize_contact("171234567", 10), "0171234567");
        assert_eq!(normalize_contact(" 171234567 ", 10), "0171234567");
    }

    #[test]
    fn test_leaves_other_lengths() {
        assert_eq!(normalize_contact("0171234567", 10), "0171234567");
        assert_eq!(normalize_contact("01712345678", 10), "01712345678");
        assert_eq!(normalize_contact("1234", 10), "1234");
        assert_eq!(normalize_contact("", 10), "");
    }

    #[test]
    fn test_leaves_non_digit_values() {
        assert_eq!(normalize_contact("17123-456", 10), "17123-456");
        assert_eq!(normalize_contact("+88017123", 10), "+88017123");
    }

    #[test]
    fn test_custom_target_length() {
        assert_eq!(normalize_contact("1711111111", 11), "01711111111");
        assert_eq!(normalize_contact("171234567", 11), "171234567");
    }
}
