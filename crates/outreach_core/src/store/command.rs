//! Store commands and the pure transition function.
//!
//! # Invariants
//! - `reduce` never mutates its input snapshot.
//! - `AddCommunication` checks the company exists before building anything,
//!   so a rejection cannot leave half-applied state.
//! - The new communication and the company's last date/sequence are written
//!   into the same returned snapshot.

use super::{StoreError, StoreResult, TrackerState};
use crate::model::communication::{Communication, CommunicationId, NewCommunication};
use crate::model::company::{Company, CompanyId, CompanyPatch, NewCompany};
use crate::model::method::{CommunicationMethod, MethodId, MethodPatch, NewCommunicationMethod};
use crate::schedule::sequence::advance_sequence;
use uuid::Uuid;

/// Closed set of state-changing commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddCompany(NewCompany),
    UpdateCompany(CompanyPatch),
    DeleteCompany(CompanyId),
    AddCommunicationMethod(NewCommunicationMethod),
    UpdateCommunicationMethod(MethodPatch),
    DeleteCommunicationMethod(MethodId),
    AddCommunication(NewCommunication),
}

impl Command {
    /// Stable event name used in log lines.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::AddCompany(_) => "company_add",
            Self::UpdateCompany(_) => "company_update",
            Self::DeleteCompany(_) => "company_delete",
            Self::AddCommunicationMethod(_) => "method_add",
            Self::UpdateCommunicationMethod(_) => "method_update",
            Self::DeleteCommunicationMethod(_) => "method_delete",
            Self::AddCommunication(_) => "communication_log",
        }
    }
}

/// What a successful command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    CompanyAdded(CompanyId),
    MethodAdded(MethodId),
    CommunicationLogged {
        id: CommunicationId,
        company_id: CompanyId,
        sequence: u32,
    },
    /// Update or delete matched a record.
    Applied,
    /// Update or delete targeted an unknown id; nothing changed.
    Unmatched,
}

/// New snapshot plus the outcome that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TrackerState,
    pub outcome: Outcome,
}

/// Applies `command` to `state` at time `now`.
///
/// `default_periodicity_days` is given to companies added without one.
///
/// # Errors
/// - [`StoreError::CompanyNotFound`] when a communication references an
///   unknown company.
pub fn reduce(
    state: &TrackerState,
    command: &Command,
    now: i64,
    default_periodicity_days: u32,
) -> StoreResult<Transition> {
    match command {
        Command::AddCompany(input) => {
            let (next, id) = add_company(state, input, now, default_periodicity_days);
            Ok(Transition {
                state: next,
                outcome: Outcome::CompanyAdded(id),
            })
        }
        Command::UpdateCompany(patch) => {
            let mut next = state.clone();
            let outcome = match next.companies.iter_mut().find(|c| c.id == patch.id) {
                Some(company) => {
                    company.apply_patch(patch);
                    Outcome::Applied
                }
                None => Outcome::Unmatched,
            };
            Ok(Transition {
                state: next,
                outcome,
            })
        }
        Command::DeleteCompany(id) => {
            let mut next = state.clone();
            let before = next.companies.len();
            next.companies.retain(|company| company.id != *id);
            Ok(Transition {
                outcome: removal_outcome(before, next.companies.len()),
                state: next,
            })
        }
        Command::AddCommunicationMethod(input) => {
            let (next, id) = add_method(state, input);
            Ok(Transition {
                state: next,
                outcome: Outcome::MethodAdded(id),
            })
        }
        Command::UpdateCommunicationMethod(patch) => {
            let mut next = state.clone();
            let outcome = match next
                .communication_methods
                .iter_mut()
                .find(|m| m.id == patch.id)
            {
                Some(method) => {
                    method.apply_patch(patch);
                    Outcome::Applied
                }
                None => Outcome::Unmatched,
            };
            Ok(Transition {
                state: next,
                outcome,
            })
        }
        Command::DeleteCommunicationMethod(id) => {
            let mut next = state.clone();
            let before = next.communication_methods.len();
            next.communication_methods.retain(|method| method.id != *id);
            Ok(Transition {
                outcome: removal_outcome(before, next.communication_methods.len()),
                state: next,
            })
        }
        Command::AddCommunication(input) => {
            let (next, communication) = log_communication(state, input, now)?;
            Ok(Transition {
                state: next,
                outcome: Outcome::CommunicationLogged {
                    id: communication.id,
                    company_id: communication.company_id,
                    sequence: communication.sequence,
                },
            })
        }
    }
}

/// Appends a new company and returns the snapshot with its id.
pub fn add_company(
    state: &TrackerState,
    input: &NewCompany,
    now: i64,
    default_periodicity_days: u32,
) -> (TrackerState, CompanyId) {
    let company = Company::from_new(input.clone(), default_periodicity_days, now);
    let id = company.id;
    let mut next = state.clone();
    next.companies.push(company);
    (next, id)
}

/// Appends a new method and returns the snapshot with its id.
pub fn add_method(state: &TrackerState, input: &NewCommunicationMethod) -> (TrackerState, MethodId) {
    let fallback_sequence = sequence_after(state.communication_methods.len());
    let method = CommunicationMethod::from_new(input.clone(), fallback_sequence);
    let id = method.id;
    let mut next = state.clone();
    next.communication_methods.push(method);
    (next, id)
}

/// Logs a communication and advances the owning company in one snapshot.
///
/// # Errors
/// - [`StoreError::CompanyNotFound`] before anything is built.
pub fn log_communication(
    state: &TrackerState,
    input: &NewCommunication,
    now: i64,
) -> StoreResult<(TrackerState, Communication)> {
    let company = state
        .company(input.company_id)
        .ok_or(StoreError::CompanyNotFound(input.company_id))?;
    let sequence = advance_sequence(
        state.communication_methods.len(),
        company.last_communication_sequence,
    );

    let communication = Communication {
        id: Uuid::new_v4(),
        company_id: input.company_id,
        kind: input.kind.clone(),
        timestamp: input.timestamp,
        notes: input.notes.clone(),
        sequence,
        created_at: now,
    };

    let mut next = state.clone();
    next.communications.push(communication.clone());
    for company in next
        .companies
        .iter_mut()
        .filter(|company| company.id == input.company_id)
    {
        company.last_communication_date = Some(input.timestamp);
        company.last_communication_sequence = sequence;
    }

    Ok((next, communication))
}

fn sequence_after(method_count: usize) -> u32 {
    u32::try_from(method_count)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

fn removal_outcome(before: usize, after: usize) -> Outcome {
    if after < before {
        Outcome::Applied
    } else {
        Outcome::Unmatched
    }
}
