/// Reverse the character buffer and alternate its case.
///
/// The first character of the output (the last character of the buffer) is
/// uppercase, the second lowercase, and so on. An empty buffer gives an empty
/// string.
pub fn alternating_reverse(letters: &[char]) -> String {
    letters
        .iter()
        .rev()
        .enumerate()
        .map(|(position, c)| {
            if position % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_alternating_reverse_empty() {
        assert_eq!(alternating_reverse(&[]), "");
    }

    #[test]
    fn test_alternating_reverse_single() {
        assert_eq!(alternating_reverse(&['a']), "A");
    }

    #[test]
    fn test_alternating_reverse_mixed_case_input() {
        // Buffer for ["a", "R"]
        assert_eq!(alternating_reverse(&chars("aR")), "Ra");
        // Buffer for ["A", "ABcD", "DOE"]
        assert_eq!(alternating_reverse(&chars("AABcDDOE")), "EoDdCbAa");
    }

    #[test]
    fn test_alternating_reverse_preserves_length() {
        let input = chars("ayb");
        let output = alternating_reverse(&input);
        assert_eq!(output, "ByA");
        assert_eq!(output.chars().count(), input.len());
    }
}
