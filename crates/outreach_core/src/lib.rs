//! Core domain logic for outreach tracking.
//! This crate owns the scheduling rules and the in-memory state store.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod schedule;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{default_method_seed, ConfigError, MethodSeed, TrackerConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::communication::{Communication, CommunicationId, NewCommunication};
pub use model::company::{Company, CompanyId, CompanyPatch, NewCompany, DEFAULT_PERIODICITY_DAYS};
pub use model::method::{CommunicationMethod, MethodId, MethodPatch, NewCommunicationMethod};
pub use model::DAY_MS;
pub use schedule::history::{all_for_company, calendar_events, last_five, CalendarEvent};
pub use schedule::overdue::{company_status, overdue_companies, CompanyStatus};
pub use schedule::sequence::{next_scheduled, NextCommunication};
pub use service::tracker_service::{BulkLogRequest, TrackerService};
pub use store::{Command, Outcome, Store, StoreError, StoreResult, TrackerState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
