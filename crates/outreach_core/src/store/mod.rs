//! In-memory state store.
//!
//! # Responsibility
//! - Own the company, method and communication collections.
//! - Apply commands through a single pure transition and commit the result.
//!
//! # Invariants
//! - A snapshot is only replaced when its transition succeeds; a rejected
//!   command leaves every collection untouched.
//! - Collections keep insertion order.
//! - Deleting a company never removes its communications.

pub mod command;

use crate::config::TrackerConfig;
use crate::model::communication::{Communication, NewCommunication};
use crate::model::company::{Company, CompanyId, NewCompany};
use crate::model::method::{CommunicationMethod, MethodId, NewCommunicationMethod};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use command::{reduce, Command, Outcome, Transition};

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejection reasons for store commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A communication referenced a company that does not exist.
    CompanyNotFound(CompanyId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompanyNotFound(id) => write!(f, "referenced company not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Settled snapshot of all tracked data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    pub companies: Vec<Company>,
    pub communication_methods: Vec<CommunicationMethod>,
    pub communications: Vec<Communication>,
}

impl TrackerState {
    /// Builds a snapshot holding only the configured seed methods.
    ///
    /// Each seed method gets a fresh id.
    pub fn seeded(config: &TrackerConfig) -> Self {
        let communication_methods = config
            .seed_methods
            .iter()
            .map(|seed| {
                CommunicationMethod::from_new(
                    NewCommunicationMethod {
                        id: None,
                        name: seed.name.clone(),
                        description: seed.description.clone(),
                        sequence: Some(seed.sequence),
                        is_mandatory: seed.is_mandatory,
                    },
                    seed.sequence,
                )
            })
            .collect();

        Self {
            companies: Vec::new(),
            communication_methods,
            communications: Vec::new(),
        }
    }

    /// Looks up a company by id.
    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    /// Looks up a communication method by id.
    pub fn method(&self, id: MethodId) -> Option<&CommunicationMethod> {
        self.communication_methods
            .iter()
            .find(|method| method.id == id)
    }
}

/// Single-writer owner of the current snapshot.
#[derive(Debug, Clone)]
pub struct Store {
    state: TrackerState,
    default_periodicity_days: u32,
}

impl Store {
    /// Creates a store seeded from `config`.
    pub fn new(config: &TrackerConfig) -> Self {
        Self::from_state(TrackerState::seeded(config), config.default_periodicity_days)
    }

    /// Wraps an existing snapshot, e.g. one restored by the caller.
    pub fn from_state(state: TrackerState, default_periodicity_days: u32) -> Self {
        Self {
            state,
            default_periodicity_days,
        }
    }

    /// Current settled snapshot.
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Applies one command at time `now`.
    ///
    /// The new snapshot is committed only when the transition succeeds.
    pub fn dispatch(&mut self, command: &Command, now: i64) -> StoreResult<Outcome> {
        let transition = reduce(&self.state, command, now, self.default_periodicity_days)?;
        self.state = transition.state;
        Ok(transition.outcome)
    }

    /// Adds a company and returns its generated id.
    pub fn add_company(&mut self, input: &NewCompany, now: i64) -> CompanyId {
        let (next, id) = command::add_company(&self.state, input, now, self.default_periodicity_days);
        self.state = next;
        id
    }

    /// Adds a communication method and returns its id.
    pub fn add_method(&mut self, input: &NewCommunicationMethod) -> MethodId {
        let (next, id) = command::add_method(&self.state, input);
        self.state = next;
        id
    }

    /// Logs one communication and returns the stored record.
    pub fn log_communication(
        &mut self,
        input: &NewCommunication,
        now: i64,
    ) -> StoreResult<Communication> {
        let (next, communication) = command::log_communication(&self.state, input, now)?;
        self.state = next;
        Ok(communication)
    }

    /// Logs a batch of communications as one unit.
    ///
    /// Either every entry is logged and the final snapshot is committed, or
    /// the first failure is returned and the store is left as it was.
    pub fn log_communications(
        &mut self,
        inputs: &[NewCommunication],
        now: i64,
    ) -> StoreResult<Vec<Communication>> {
        let mut working = self.state.clone();
        let mut logged = Vec::with_capacity(inputs.len());
        for input in inputs {
            let (next, communication) = command::log_communication(&working, input, now)?;
            working = next;
            logged.push(communication);
        }
        self.state = working;
        Ok(logged)
    }
}

#[cfg(test)]
mod tests {
    use super::{Store, StoreError};
    use crate::config::TrackerConfig;
    use crate::model::communication::NewCommunication;
    use crate::model::company::NewCompany;
    use uuid::Uuid;

    #[test]
    fn add_company_returns_id_present_in_state() {
        let mut store = Store::new(&TrackerConfig::default());
        let id = store.add_company(&NewCompany::named("Acme"), 5);
        let company = store.state().company(id).expect("company stored");
        assert_eq!(company.name, "Acme");
        assert_eq!(company.created_at, 5);
    }

    #[test]
    fn log_communication_returns_stored_record() {
        let mut store = Store::new(&TrackerConfig::default());
        let id = store.add_company(&NewCompany::named("Acme"), 0);
        let logged = store
            .log_communication(&NewCommunication::new(id, "Email", 100), 7)
            .expect("company exists");

        assert_eq!(logged.sequence, 1);
        assert_eq!(logged.created_at, 7);
        assert_eq!(store.state().communications, vec![logged]);
    }

    #[test]
    fn rejected_batch_leaves_store_unchanged() {
        let mut store = Store::new(&TrackerConfig::default());
        let id = store.add_company(&NewCompany::named("Acme"), 0);
        let before = store.state().clone();
        let missing = Uuid::new_v4();

        let err = store
            .log_communications(
                &[
                    NewCommunication::new(id, "Email", 100),
                    NewCommunication::new(missing, "Email", 100),
                ],
                1,
            )
            .expect_err("unknown company must reject the batch");

        assert_eq!(err, StoreError::CompanyNotFound(missing));
        assert_eq!(store.state(), &before);
    }
}
