//! Core library for bfhl
//!
//! This crate implements the **Functional Core** of the bfhl application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`bfhl_core`** (this crate): Pure transformation functions with zero I/O
//! - **`bfhl`**: HTTP server, stdio transport and CLI (the Imperative Shell)
//!
//! The only impure inputs are the identity record and the calendar date, and
//! both are injected into [`record::Processor`] at construction time.
//!
//! # Pipeline
//!
//! Each invocation runs once, front to back:
//!
//! 1. [`classify`]: tag every token as a number, alphabetic, special
//!    character or unclassified.
//! 2. [`aggregate`]: bucket numbers by parity, uppercase alphabetic tokens,
//!    keep special characters and compute the sum.
//! 3. [`transform`]: reverse the alphabetic characters and alternate case.
//! 4. [`record`]: assemble the success or failure record.
//!
//! [`api`] wraps the pipeline with request decoding, input validation and
//! routing so every transport answers the same way.
//!
//! # Example Usage
//!
//! ```rust
//! use bfhl_core::identity::{FixedClock, IdentityRecord};
//! use bfhl_core::record::{Outcome, Processor};
//! use chrono::NaiveDate;
//!
//! let processor = Processor::new(
//!     IdentityRecord::new("john_doe", "john@xyz.com", "ABCD123"),
//!     FixedClock(NaiveDate::from_ymd_opt(2024, 9, 5).unwrap()),
//! );
//!
//! match processor.process_tokens(&["a", "1", "334", "4", "R", "$"]) {
//!     Outcome::Success(record) => {
//!         assert_eq!(record.sum, "339");
//!         assert_eq!(record.user_id, "john_doe_05092024");
//!     }
//!     Outcome::Failure(err) => panic!("{}", err.message),
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod classify;
pub mod error;
pub mod identity;
pub mod record;
pub mod transform;
