//! Method ordering, sequence advance and next-communication lookup.

use crate::model::company::{Company, CompanyId};
use crate::model::method::CommunicationMethod;
use crate::model::DAY_MS;
use crate::store::TrackerState;
use serde::{Deserialize, Serialize};

/// Suggested next communication for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextCommunication {
    /// Due date in Unix epoch milliseconds.
    pub date: i64,
    /// Suggested method name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Sequence of the suggested method.
    pub sequence: u32,
}

/// Returns methods ordered by ascending `sequence`; ties keep insertion order.
pub fn sorted_methods(methods: &[CommunicationMethod]) -> Vec<&CommunicationMethod> {
    let mut sorted: Vec<&CommunicationMethod> = methods.iter().collect();
    sorted.sort_by_key(|method| method.sequence);
    sorted
}

/// Computes the sequence stored by the next logged communication.
///
/// The counter increments until it reaches the number of known methods and
/// then stays put. It never decreases, even when methods were removed after
/// it advanced.
pub fn advance_sequence(method_count: usize, last_sequence: u32) -> u32 {
    let below_count = usize::try_from(last_sequence)
        .map(|last| last < method_count)
        .unwrap_or(false);
    if below_count {
        last_sequence + 1
    } else {
        last_sequence
    }
}

/// Suggests the next method and due date for a company.
///
/// Returns `None` when the company is unknown or no methods exist.
pub fn next_scheduled(state: &TrackerState, company_id: CompanyId) -> Option<NextCommunication> {
    let company = state.company(company_id)?;
    next_for_company(company, &state.communication_methods)
}

/// Same as [`next_scheduled`] for an already resolved company.
///
/// A company that never logged anything (sequence 0) is treated as being at
/// sequence 1, so its first suggestion is the method after sequence 1.
pub fn next_for_company(
    company: &Company,
    methods: &[CommunicationMethod],
) -> Option<NextCommunication> {
    let sorted = sorted_methods(methods);
    let current = match company.last_communication_sequence {
        0 => 1,
        value => value,
    };

    let method = sorted
        .iter()
        .find(|method| method.sequence > current)
        .or_else(|| sorted.last())?;

    let last_date = company.last_communication_date.unwrap_or(0);
    let period_ms = i64::from(company.effective_periodicity_days()) * DAY_MS;

    Some(NextCommunication {
        date: last_date.saturating_add(period_ms),
        kind: method.name.clone(),
        sequence: method.sequence,
    })
}
