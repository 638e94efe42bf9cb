//! Use-case services.
//!
//! # Responsibility
//! - Expose the command/query API consumed by presentation layers.
//! - Stamp commands with the injected clock and log their outcomes.

pub mod tracker_service;
