//! Identity record and the date source used to derive the user id.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed identity reported in every success record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub full_name: String,
    pub email: String,
    pub roll_number: String,
}

impl IdentityRecord {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        roll_number: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            roll_number: roll_number.into(),
        }
    }
}

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Build the user id: lowercased full name, an underscore, then `DDMMYYYY`.
pub fn user_id(full_name: &str, date: NaiveDate) -> String {
    format!("{}_{}", full_name.to_lowercase(), date.format("%d%m%Y"))
}
