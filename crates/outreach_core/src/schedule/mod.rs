//! Scheduling engine: derived queries over a store snapshot.
//!
//! # Responsibility
//! - Compute the clamped sequence advance used when logging a communication.
//! - Derive next-due method/date, overdue status and history views.
//!
//! # Invariants
//! - Every function here is pure: inputs are borrowed, nothing is mutated.
//! - Unknown ids yield `None` or an empty list, never an error.
//! - Method ordering always uses a stable ascending sort by `sequence`.

pub mod history;
pub mod overdue;
pub mod sequence;
