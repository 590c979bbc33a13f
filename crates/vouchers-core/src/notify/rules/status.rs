//! Issuance status (`Voucher Given`) cleaning.

/// Lower-case, trimmed value with non-breaking spaces and BOMs removed.
pub fn normalize_marker(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\u{00a0}' && *c != '\u{feff}')
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// True when the row's voucher was already given or withdrawn.
pub fn is_already_issued(value: Option<&str>, markers: &[String]) -> bool {
    value
        .map(normalize_marker)
        .is_some_and(|v| markers.iter().any(|m| m.eq_ignore_ascii_case(&v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        vec!["yes".to_string(), "withdrawn".to_string()]
    }

    #[test]
    fn test_markers_match_case_and_whitespace_insensitively() {
        assert!(is_already_issued(Some("Yes"), &markers()));
        assert!(is_already_issued(Some("  WITHDRAWN "), &markers()));
        assert!(is_already_issued(Some("\u{feff}yes\u{00a0}"), &markers()));
    }

    #[test]
    fn test_other_values_are_kept() {
        assert!(!is_already_issued(Some("No"), &markers()));
        assert!(!is_already_issued(Some(""), &markers()));
        assert!(!is_already_issued(Some("yes please"), &markers()));
        assert!(!is_already_issued(None, &markers()));
    }
}
