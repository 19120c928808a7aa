//! Result assembly
//!
//! [`Processor`] owns the identity record and the clock, runs the
//! classification pipeline and returns either a [`ResultRecord`] or an
//! [`ErrorRecord`]. Failures are data, not errors: callers always receive a
//! well-formed [`Outcome`].

use serde::Serialize;
use serde_json::Value;

use crate::aggregate::aggregate;
use crate::error::ProcessError;
use crate::identity::{user_id, Clock, IdentityRecord, SystemClock};
use crate::transform::alternating_reverse;

/// Label carried by every processing failure.
pub const PROCESSING_ERROR: &str = "Error processing data";

/// Successful classification of a token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "is_success")]
    pub success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    pub sum: String,
    pub concat_string: String,
}

/// Failure record. Carries no partial lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    #[serde(rename = "is_success")]
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

impl From<ProcessError> for ErrorRecord {
    fn from(err: ProcessError) -> Self {
        ErrorRecord::new(PROCESSING_ERROR, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Success(ResultRecord),
    Failure(ErrorRecord),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Runs the classification pipeline for a fixed identity.
#[derive(Debug, Clone)]
pub struct Processor<C = SystemClock> {
    identity: IdentityRecord,
    clock: C,
}

impl Processor<SystemClock> {
    /// Processor that reads the local date from the system clock.
    pub fn with_system_clock(identity: IdentityRecord) -> Self {
        Self::new(identity, SystemClock)
    }
}

impl<C: Clock> Processor<C> {
    pub fn new(identity: IdentityRecord, clock: C) -> Self {
        Self { identity, clock }
    }

    pub fn identity(&self) -> &IdentityRecord {
        &self.identity
    }

    /// Process a decoded JSON list. Every element must be a string.
    pub fn process(&self, data: &[Value]) -> Outcome {
        match tokens_from_values(data) {
            Ok(tokens) => Outcome::Success(self.build(tokens.as_slice())),
            Err(err) => Outcome::Failure(err.into()),
        }
    }

    /// Process tokens that are already known to be strings. Always succeeds.
    pub fn process_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Outcome {
        Outcome::Success(self.build(tokens))
    }

    fn build<S: AsRef<str>>(&self, tokens: &[S]) -> ResultRecord {
        let aggregation = aggregate(tokens);
        let concat_string = alternating_reverse(&aggregation.letters);

        ResultRecord {
            success: true,
            user_id: user_id(&self.identity.full_name, self.clock.today()),
            email: self.identity.email.clone(),
            roll_number: self.identity.roll_number.clone(),
            odd_numbers: aggregation.odd_numbers,
            even_numbers: aggregation.even_numbers,
            alphabets: aggregation.alphabets,
            special_characters: aggregation.special_characters,
            sum: aggregation.sum.to_string(),
            concat_string,
        }
    }
}

fn tokens_from_values(data: &[Value]) -> Result<Vec<&str>, ProcessError> {
    data.iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_str().ok_or(ProcessError::NonStringToken {
                index,
                kind: value_kind(value),
            })
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
