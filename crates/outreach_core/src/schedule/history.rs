//! Communication history views and calendar projection.

use crate::config::DEFAULT_HISTORY_PREVIEW_LIMIT;
use crate::model::communication::{Communication, CommunicationId};
use crate::model::company::CompanyId;
use crate::store::TrackerState;
use serde::{Deserialize, Serialize};

/// Title used for calendar events whose company was deleted.
pub const UNKNOWN_COMPANY_TITLE: &str = "Unknown Company";

/// All-day calendar entry for one logged communication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub communication_id: CommunicationId,
    pub company_id: CompanyId,
    /// Company name, or [`UNKNOWN_COMPANY_TITLE`] for orphans.
    pub title: String,
    pub start: i64,
    pub end: i64,
    pub all_day: bool,
}

/// Company communications, newest first, capped at `limit` entries.
///
/// Equal timestamps keep their logging order.
pub fn recent_for_company(
    state: &TrackerState,
    company_id: CompanyId,
    limit: usize,
) -> Vec<&Communication> {
    let mut items: Vec<&Communication> = state
        .communications
        .iter()
        .filter(|communication| communication.company_id == company_id)
        .collect();
    items.sort_by(|left, right| right.timestamp.cmp(&left.timestamp));
    items.truncate(limit);
    items
}

/// Five most recent communications of a company.
pub fn last_five(state: &TrackerState, company_id: CompanyId) -> Vec<&Communication> {
    recent_for_company(state, company_id, DEFAULT_HISTORY_PREVIEW_LIMIT)
}

/// Every communication of a company, newest first.
///
/// Still returns records after the company itself was deleted.
pub fn all_for_company(state: &TrackerState, company_id: CompanyId) -> Vec<&Communication> {
    recent_for_company(state, company_id, usize::MAX)
}

/// Projects every communication into an all-day calendar event.
pub fn calendar_events(state: &TrackerState) -> Vec<CalendarEvent> {
    state
        .communications
        .iter()
        .map(|communication| {
            let title = state
                .company(communication.company_id)
                .map(|company| company.name.clone())
                .unwrap_or_else(|| UNKNOWN_COMPANY_TITLE.to_string());
            CalendarEvent {
                communication_id: communication.id,
                company_id: communication.company_id,
                title,
                start: communication.timestamp,
                end: communication.timestamp,
                all_day: true,
            }
        })
        .collect()
}
