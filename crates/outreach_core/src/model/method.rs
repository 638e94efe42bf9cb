//! Communication method model.
//!
//! A method is one named step of the outreach cadence. Methods are ordered
//! by `sequence`; equal sequences keep their insertion order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a communication method.
pub type MethodId = Uuid;

/// Named, ordered outreach step (e.g. "LinkedIn Post", "Email").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationMethod {
    pub id: MethodId,
    pub name: String,
    pub description: String,
    /// Position in the cadence. Positive.
    pub sequence: u32,
    pub is_mandatory: bool,
}

impl CommunicationMethod {
    /// Builds a method from caller input.
    ///
    /// `fallback_sequence` is used when the input carries no (or a zero)
    /// sequence.
    pub fn from_new(input: NewCommunicationMethod, fallback_sequence: u32) -> Self {
        let sequence = match input.sequence {
            Some(value) if value > 0 => value,
            _ => fallback_sequence,
        };

        Self {
            id: input.id.unwrap_or_else(Uuid::new_v4),
            name: input.name,
            description: input.description,
            sequence,
            is_mandatory: input.is_mandatory,
        }
    }

    /// Overwrites every field the patch carries.
    ///
    /// A zero `sequence` is ignored so sequences stay positive.
    pub fn apply_patch(&mut self, patch: &MethodPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(sequence) = patch.sequence.filter(|value| *value > 0) {
            self.sequence = sequence;
        }
        if let Some(is_mandatory) = patch.is_mandatory {
            self.is_mandatory = is_mandatory;
        }
    }
}

/// Input for adding a communication method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCommunicationMethod {
    /// Caller-provided id; generated when absent.
    pub id: Option<MethodId>,
    pub name: String,
    pub description: String,
    /// Defaults to `method count + 1` when absent or zero.
    pub sequence: Option<u32>,
    pub is_mandatory: bool,
}

/// Shallow field overwrite for an existing method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodPatch {
    pub id: MethodId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sequence: Option<u32>,
    #[serde(default)]
    pub is_mandatory: Option<bool>,
}

impl MethodPatch {
    /// Creates a patch that changes nothing.
    pub fn for_method(id: MethodId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            sequence: None,
            is_mandatory: None,
        }
    }
}
