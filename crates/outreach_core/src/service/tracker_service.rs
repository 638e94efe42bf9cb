//! Outreach tracker use-case service.
//!
//! # Responsibility
//! - Own the store and the clock for one application root.
//! - Translate API calls into store commands and scheduling queries.
//! - Emit one metadata-only log line per command.
//!
//! # Invariants
//! - Commands run to completion before the next one starts (`&mut self`).
//! - Queries only read the settled snapshot.
//! - Bulk logging commits all communications or none.

use crate::clock::Clock;
use crate::config::TrackerConfig;
use crate::model::communication::{Communication, NewCommunication};
use crate::model::company::{Company, CompanyId, CompanyPatch, NewCompany};
use crate::model::method::{CommunicationMethod, MethodId, MethodPatch, NewCommunicationMethod};
use crate::schedule::history::{self, CalendarEvent};
use crate::schedule::overdue::{self, CompanyStatus};
use crate::schedule::sequence::{self, NextCommunication};
use crate::store::{Command, Outcome, Store, StoreResult, TrackerState};
use log::{info, warn};
use std::collections::HashSet;

/// Request for logging one communication against several companies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkLogRequest {
    pub company_ids: Vec<CompanyId>,
    /// Method name recorded on every communication.
    pub kind: String,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
    pub notes: Option<String>,
}

/// Service facade over the in-memory store.
pub struct TrackerService<C: Clock> {
    store: Store,
    clock: C,
    history_preview_limit: usize,
}

impl<C: Clock> TrackerService<C> {
    /// Creates a service with a store seeded from `config`.
    pub fn new(config: &TrackerConfig, clock: C) -> Self {
        Self {
            store: Store::new(config),
            clock,
            history_preview_limit: config.history_preview_limit,
        }
    }

    /// Creates a service around an existing store.
    pub fn with_store(store: Store, clock: C, history_preview_limit: usize) -> Self {
        Self {
            store,
            clock,
            history_preview_limit,
        }
    }

    /// Current settled snapshot.
    pub fn state(&self) -> &TrackerState {
        self.store.state()
    }

    /// Known methods in stored order.
    pub fn communication_methods(&self) -> &[CommunicationMethod] {
        &self.store.state().communication_methods
    }

    /// Adds a company and returns its generated id.
    pub fn add_company(&mut self, input: NewCompany) -> CompanyId {
        let id = self.store.add_company(&input, self.clock.now_ms());
        log_outcome("company_add", &Outcome::CompanyAdded(id));
        id
    }

    /// Overwrites the fields carried by `patch`.
    ///
    /// Returns `false` when no company has the patch id.
    pub fn update_company(&mut self, patch: CompanyPatch) -> bool {
        self.run_matching(Command::UpdateCompany(patch))
    }

    /// Removes a company. Its communications stay in the store.
    ///
    /// Returns `false` when the id was unknown.
    pub fn delete_company(&mut self, id: CompanyId) -> bool {
        self.run_matching(Command::DeleteCompany(id))
    }

    /// Adds a communication method and returns its id.
    pub fn add_communication_method(&mut self, input: NewCommunicationMethod) -> MethodId {
        let id = self.store.add_method(&input);
        log_outcome("method_add", &Outcome::MethodAdded(id));
        id
    }

    /// Overwrites the fields carried by `patch`.
    pub fn update_communication_method(&mut self, patch: MethodPatch) -> bool {
        self.run_matching(Command::UpdateCommunicationMethod(patch))
    }

    /// Removes a communication method.
    pub fn delete_communication_method(&mut self, id: MethodId) -> bool {
        self.run_matching(Command::DeleteCommunicationMethod(id))
    }

    /// Logs a communication and advances the company's sequence.
    ///
    /// # Errors
    /// - [`crate::store::StoreError::CompanyNotFound`] when `input.company_id` is unknown;
    ///   nothing is changed in that case.
    pub fn add_communication(&mut self, input: NewCommunication) -> StoreResult<Communication> {
        match self.store.log_communication(&input, self.clock.now_ms()) {
            Ok(communication) => {
                log_outcome("communication_log", &logged_outcome(&communication));
                Ok(communication)
            }
            Err(err) => {
                warn!("event=communication_log module=service status=rejected error={err}");
                Err(err)
            }
        }
    }

    /// Logs the same communication against every listed company.
    ///
    /// Repeated ids are logged once, in first-seen order, so one event
    /// advances each company's sequence by at most one step.
    ///
    /// # Errors
    /// - [`crate::store::StoreError::CompanyNotFound`] for the first unknown id; no
    ///   communication from the batch is kept.
    pub fn log_communication_for_companies(
        &mut self,
        request: BulkLogRequest,
    ) -> StoreResult<Vec<Communication>> {
        let mut seen = HashSet::new();
        let inputs: Vec<NewCommunication> = request
            .company_ids
            .iter()
            .filter(|company_id| seen.insert(**company_id))
            .map(|company_id| NewCommunication {
                company_id: *company_id,
                kind: request.kind.clone(),
                timestamp: request.timestamp,
                notes: request.notes.clone(),
            })
            .collect();

        match self.store.log_communications(&inputs, self.clock.now_ms()) {
            Ok(logged) => {
                info!(
                    "event=communication_bulk_log module=service status=ok batch_size={}",
                    logged.len()
                );
                Ok(logged)
            }
            Err(err) => {
                warn!(
                    "event=communication_bulk_log module=service status=rejected batch_size={} error={}",
                    inputs.len(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Looks up a company by id.
    pub fn get_company_by_id(&self, id: CompanyId) -> Option<&Company> {
        self.store.state().company(id)
    }

    /// Five most recent communications of a company, newest first.
    pub fn last_five(&self, company_id: CompanyId) -> Vec<&Communication> {
        history::last_five(self.store.state(), company_id)
    }

    /// Most recent communications of a company, capped by the configured
    /// preview limit.
    pub fn recent_communications(&self, company_id: CompanyId) -> Vec<&Communication> {
        history::recent_for_company(self.store.state(), company_id, self.history_preview_limit)
    }

    /// All communications of a company, newest first.
    pub fn all_for_company(&self, company_id: CompanyId) -> Vec<&Communication> {
        history::all_for_company(self.store.state(), company_id)
    }

    /// Next suggested method and due date for a company.
    pub fn next_scheduled(&self, company_id: CompanyId) -> Option<NextCommunication> {
        sequence::next_scheduled(self.store.state(), company_id)
    }

    /// Overdue companies as of the clock's current time.
    pub fn overdue_companies(&self) -> Vec<&Company> {
        overdue::overdue_companies(self.store.state(), self.clock.now_ms())
    }

    /// Status tier of a company, or `None` if it is unknown.
    pub fn company_status(&self, company_id: CompanyId) -> Option<CompanyStatus> {
        self.get_company_by_id(company_id)
            .map(|company| overdue::company_status(company, self.clock.now_ms()))
    }

    /// Whole days since the company's last communication.
    pub fn days_since_last_communication(&self, company_id: CompanyId) -> Option<i64> {
        self.get_company_by_id(company_id).and_then(|company| {
            overdue::days_since_last_communication(company, self.clock.now_ms())
        })
    }

    /// Calendar projection of every logged communication.
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        history::calendar_events(self.store.state())
    }

    fn run(&mut self, command: Command) -> StoreResult<Outcome> {
        let now = self.clock.now_ms();
        let event = command.event_name();
        match self.store.dispatch(&command, now) {
            Ok(outcome) => {
                log_outcome(event, &outcome);
                Ok(outcome)
            }
            Err(err) => {
                warn!(
                    "event={} module=service status=rejected error={}",
                    event, err
                );
                Err(err)
            }
        }
    }

    fn run_matching(&mut self, command: Command) -> bool {
        matches!(self.run(command), Ok(Outcome::Applied))
    }
}

fn log_outcome(event: &str, outcome: &Outcome) {
    match outcome {
        Outcome::CompanyAdded(id) => {
            info!("event={event} module=service status=ok company_id={id}");
        }
        Outcome::MethodAdded(id) => {
            info!("event={event} module=service status=ok method_id={id}");
        }
        Outcome::CommunicationLogged {
            id,
            company_id,
            sequence,
        } => {
            info!(
                "event={event} module=service status=ok communication_id={id} company_id={company_id} sequence={sequence}"
            );
        }
        Outcome::Applied => info!("event={event} module=service status=ok"),
        Outcome::Unmatched => info!("event={event} module=service status=noop reason=unknown_id"),
    }
}

fn logged_outcome(communication: &Communication) -> Outcome {
    Outcome::CommunicationLogged {
        id: communication.id,
        company_id: communication.company_id,
        sequence: communication.sequence,
    }
}
