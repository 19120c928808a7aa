//! Single pass over the tokens that buckets them by classification.

use crate::classify::{classify, truncated_value, Classification};

/// Parallel output lists built from one token list.
///
/// Every list preserves the input order of the tokens assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    /// Saturates at the `i128` bounds instead of overflowing.
    pub sum: i128,
    /// Original-case characters of every alphabetic token, in input order.
    pub letters: Vec<char>,
}

impl Aggregation {
    fn push(&mut self, token: &str) {
        match classify(token) {
            Classification::Number => {
                let value = truncated_value(token);
                if value % 2 == 0 {
                    self.even_numbers.push(value.to_string());
                } else {
                    self.odd_numbers.push(value.to_string());
                }
                self.sum = self.sum.saturating_add(value);
            }
            Classification::Alphabetic => {
                self.alphabets.push(token.to_ascii_uppercase());
                self.letters.extend(token.chars());
            }
            Classification::SpecialChar => {
                self.special_characters.push(token.to_string());
            }
            Classification::Unclassified => {}
        }
    }
}

/// Classify every token and collect the results.
pub fn aggregate<S: AsRef<str>>(tokens: &[S]) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for token in tokens {
        aggregation.push(token.as_ref());
    }

    aggregation
}
