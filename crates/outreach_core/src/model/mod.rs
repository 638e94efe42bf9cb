//! Domain records for outreach tracking.
//!
//! # Responsibility
//! - Define the company, communication method and communication records.
//! - Define the caller-facing input shapes used to create or patch them.
//!
//! # Invariants
//! - Identifiers are UUID v4 and never reused.
//! - Timestamps are Unix epoch milliseconds.
//! - Communications reference companies by id only; a dangling reference is
//!   a valid state after company deletion.

pub mod communication;
pub mod company;
pub mod method;

/// Milliseconds in one day, used for periodicity arithmetic.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;
