//! Token classification
//!
//! Three predicates decide what a token is. They are evaluated in a fixed
//! priority order by [`classify`]: numeric first, then alphabetic, then the
//! single special character check. The predicates themselves overlap (`"5"`
//! is a single character); mutual exclusivity comes from the ordering.

/// Punctuation accepted by [`is_special_char`].
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Category assigned to a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Number,
    Alphabetic,
    SpecialChar,
    /// Matches none of the predicates. Contributes nothing to any list or
    /// to the sum.
    Unclassified,
}

/// True when the token parses as a finite floating point number.
///
/// Surrounding whitespace is ignored. Signs, decimals and exponents are
/// accepted; `NaN` and infinities are not.
pub fn is_number(token: &str) -> bool {
    token
        .trim()
        .parse::<f64>()
        .map(|value| value.is_finite())
        .unwrap_or(false)
}

/// True when the token is one or more ASCII letters and nothing else.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// True when the token is exactly one character from [`SPECIAL_CHARACTERS`].
pub fn is_special_char(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => SPECIAL_CHARACTERS.contains(c),
        _ => false,
    }
}

/// Classify a token using the predicates in priority order.
pub fn classify(token: &str) -> Classification {
    if is_number(token) {
        Classification::Number
    } else if is_alphabetic(token) {
        Classification::Alphabetic
    } else if is_special_char(token) {
        Classification::SpecialChar
    } else {
        Classification::Unclassified
    }
}

/// Integer value of a numeric token, truncated toward zero.
///
/// The value is read from the token's leading integer digits, so `"4.9"`
/// yields 4 and `"1e2"` yields 1. Tokens with no leading digits (`".5"`)
/// fall back to truncating their floating point value. Digit runs too long
/// for an `i128` saturate at its bounds.
///
/// Callers are expected to have checked [`is_number`] first.
pub fn truncated_value(token: &str) -> i128 {
    let trimmed = token.trim();
    let negative = trimmed.starts_with('-');

    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digit_len > 0 {
        return trimmed[..sign_len + digit_len]
            .parse::<i128>()
            .unwrap_or(if negative { i128::MIN } else { i128::MAX });
    }

    // `as` saturates on overflow and maps NaN to 0
    trimmed.parse::<f64>().map_or(0, |value| value.trunc() as i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // is_number tests
    // ============================================================================

    #[test]
    fn test_is_number_integers() {
        assert!(is_number("1"));
        assert!(is_number("334"));
        assert!(is_number("-3"));
        assert!(is_number("+7"));
    }

    #[test]
    fn test_is_number_decimals_and_exponents() {
        assert!(is_number("4.9"));
        assert!(is_number("1e2"));
        assert!(is_number(".5"));
        assert!(is_number("-2.5E-3"));
    }

    #[test]
    fn test_is_number_tolerates_whitespace() {
        assert!(is_number("  42 "));
        assert!(is_number("\t7\n"));
    }

    #[test]
    fn test_is_number_rejects_text_and_empty() {
        assert!(!is_number(""));
        assert!(!is_number("   "));
        assert!(!is_number("abc"));
        assert!(!is_number("12abc"));
        assert!(!is_number("$"));
    }

    #[test]
    fn test_is_number_rejects_non_finite() {
        assert!(!is_number("NaN"));
        assert!(!is_number("inf"));
        assert!(!is_number("-infinity"));
    }

    // ============================================================================
    // is_alphabetic tests
    // ============================================================================

    #[test]
    fn test_is_alphabetic_letters() {
        assert!(is_alphabetic("a"));
        assert!(is_alphabetic("ABcD"));
        assert!(is_alphabetic("DOE"));
    }

    #[test]
    fn test_is_alphabetic_rejects_mixed_and_non_ascii() {
        assert!(!is_alphabetic(""));
        assert!(!is_alphabetic("a1"));
        assert!(!is_alphabetic("ab c"));
        assert!(!is_alphabetic("café"));
        assert!(!is_alphabetic("Ä"));
    }

    // ============================================================================
    // is_special_char tests
    // ============================================================================

    #[test]
    fn test_is_special_char_full_set() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert!(is_special_char(&c.to_string()), "expected {c:?} to match");
        }
    }

    #[test]
    fn test_is_special_char_rejects_runs_and_other_symbols() {
        assert!(!is_special_char(""));
        assert!(!is_special_char("$$"));
        assert!(!is_special_char("~"));
        assert!(!is_special_char("`"));
        assert!(!is_special_char(" "));
        assert!(!is_special_char("a"));
    }

    // ============================================================================
    // classify tests
    // ============================================================================

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(classify("5"), Classification::Number);
        assert_eq!(classify("R"), Classification::Alphabetic);
        assert_eq!(classify("$"), Classification::SpecialChar);
        // "-" and "." are punctuation, not numbers
        assert_eq!(classify("-"), Classification::SpecialChar);
        assert_eq!(classify("."), Classification::SpecialChar);
    }

    #[test]
    fn test_classify_unclassified() {
        assert_eq!(classify(""), Classification::Unclassified);
        assert_eq!(classify("a1"), Classification::Unclassified);
        assert_eq!(classify("!!"), Classification::Unclassified);
        assert_eq!(classify("é"), Classification::Unclassified);
    }

    // ============================================================================
    // truncated_value tests
    // ============================================================================

    #[test]
    fn test_truncated_value_integers() {
        assert_eq!(truncated_value("334"), 334);
        assert_eq!(truncated_value("-7"), -7);
        assert_eq!(truncated_value("+8"), 8);
        assert_eq!(truncated_value(" 12 "), 12);
    }

    #[test]
    fn test_truncated_value_drops_fraction() {
        assert_eq!(truncated_value("4.9"), 4);
        assert_eq!(truncated_value("-3.7"), -3);
        assert_eq!(truncated_value("-0.5"), 0);
    }

    #[test]
    fn test_truncated_value_reads_leading_digits_only() {
        assert_eq!(truncated_value("1e2"), 1);
        assert_eq!(truncated_value("2.5e3"), 2);
    }

    #[test]
    fn test_truncated_value_without_leading_digits() {
        assert_eq!(truncated_value(".5"), 0);
        assert_eq!(truncated_value("-.9"), 0);
    }

    #[test]
    fn test_truncated_value_beyond_i64() {
        assert_eq!(
            truncated_value("99999999999999999999"),
            99_999_999_999_999_999_999
        );
        assert_eq!(
            truncated_value("-99999999999999999999"),
            -99_999_999_999_999_999_999
        );
    }

    #[test]
    fn test_truncated_value_saturates_past_i128() {
        let long = "9".repeat(60);
        assert_eq!(truncated_value(&long), i128::MAX);
        assert_eq!(truncated_value(&format!("-{long}")), i128::MIN);
    }

    #[test]
    fn test_radix_prefixes_are_not_numbers() {
        assert!(!is_number("0x1A"));
        assert!(!is_number("0b101"));
        assert!(!is_number("0o17"));
        assert_eq!(classify("0x1A"), Classification::Unclassified);
    }
}
