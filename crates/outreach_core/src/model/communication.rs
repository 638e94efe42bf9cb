//! Logged communication model.
//!
//! # Invariants
//! - `sequence` is assigned by the store from the owning company's advanced
//!   counter, never taken from caller input.
//! - Records are immutable once logged and are never deleted.

use super::company::CompanyId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a logged communication.
pub type CommunicationId = Uuid;

/// Dated instance of contacting a company through some method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communication {
    pub id: CommunicationId,
    /// Non-owning reference; the company may since have been deleted.
    pub company_id: CompanyId,
    /// Method name. Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unix epoch milliseconds of the contact itself.
    pub timestamp: i64,
    pub notes: Option<String>,
    pub sequence: u32,
    /// Unix epoch milliseconds of when the record was logged.
    pub created_at: i64,
}

/// Input for logging a communication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommunication {
    pub company_id: CompanyId,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewCommunication {
    /// Creates an input without notes.
    pub fn new(company_id: CompanyId, kind: impl Into<String>, timestamp: i64) -> Self {
        Self {
            company_id,
            kind: kind.into(),
            timestamp,
            notes: None,
        }
    }

    /// Attaches free-form notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
