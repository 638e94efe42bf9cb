//! Company domain model.
//!
//! # Responsibility
//! - Define the tracked company record and its create/patch inputs.
//! - Own the periodicity fallback rule shared by scheduling queries.
//!
//! # Invariants
//! - `last_communication_sequence` is only advanced by logging a
//!   communication; patches cannot lower it.
//! - A stored periodicity of zero is read as [`DEFAULT_PERIODICITY_DAYS`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tracked company.
pub type CompanyId = Uuid;

/// Days between expected communications when none is configured.
pub const DEFAULT_PERIODICITY_DAYS: u32 = 14;

/// Company tracked for outreach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub location: String,
    pub linkedin_profile: String,
    /// May hold empty strings as form placeholders.
    pub emails: Vec<String>,
    /// May hold empty strings as form placeholders.
    pub phone_numbers: Vec<String>,
    pub comments: String,
    /// Expected days between communications.
    pub communication_periodicity: u32,
    /// Unix epoch milliseconds. `None` only for externally supplied records.
    #[serde(default)]
    pub last_communication_date: Option<i64>,
    /// Clamped counter of communications logged against this company.
    #[serde(default)]
    pub last_communication_sequence: u32,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Company {
    /// Builds a fresh company record from caller input.
    ///
    /// `now` becomes both `created_at` and `last_communication_date`.
    pub fn from_new(input: NewCompany, default_periodicity: u32, now: i64) -> Self {
        let periodicity = match input.communication_periodicity {
            Some(days) if days > 0 => days,
            _ => default_periodicity,
        };

        Self {
            id: Uuid::new_v4(),
            name: input.name,
            location: input.location,
            linkedin_profile: input.linkedin_profile,
            emails: input.emails.unwrap_or_else(|| vec![String::new()]),
            phone_numbers: input.phone_numbers.unwrap_or_else(|| vec![String::new()]),
            comments: input.comments,
            communication_periodicity: periodicity,
            last_communication_date: Some(now),
            last_communication_sequence: 0,
            created_at: now,
        }
    }

    /// Periodicity used by scheduling, with zero falling back to the default.
    pub fn effective_periodicity_days(&self) -> u32 {
        if self.communication_periodicity == 0 {
            DEFAULT_PERIODICITY_DAYS
        } else {
            self.communication_periodicity
        }
    }

    /// Overwrites every field the patch carries. Other fields are untouched.
    pub fn apply_patch(&mut self, patch: &CompanyPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
        if let Some(profile) = &patch.linkedin_profile {
            self.linkedin_profile = profile.clone();
        }
        if let Some(emails) = &patch.emails {
            self.emails = emails.clone();
        }
        if let Some(phones) = &patch.phone_numbers {
            self.phone_numbers = phones.clone();
        }
        if let Some(comments) = &patch.comments {
            self.comments = comments.clone();
        }
        if let Some(days) = patch.communication_periodicity {
            self.communication_periodicity = days;
        }
        if let Some(date) = patch.last_communication_date {
            self.last_communication_date = Some(date);
        }
    }
}

/// Input for adding a company.
///
/// Optional lists default to a single empty placeholder entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCompany {
    pub name: String,
    pub location: String,
    pub linkedin_profile: String,
    pub emails: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<String>>,
    pub comments: String,
    pub communication_periodicity: Option<u32>,
}

impl NewCompany {
    /// Creates an input with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Shallow field overwrite for an existing company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub id: CompanyId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub emails: Option<Vec<String>>,
    #[serde(default)]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub communication_periodicity: Option<u32>,
    #[serde(default)]
    pub last_communication_date: Option<i64>,
}

impl CompanyPatch {
    /// Creates a patch that changes nothing.
    pub fn for_company(id: CompanyId) -> Self {
        Self {
            id,
            name: None,
            location: None,
            linkedin_profile: None,
            emails: None,
            phone_numbers: None,
            comments: None,
            communication_periodicity: None,
            last_communication_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Company, CompanyPatch, NewCompany, DEFAULT_PERIODICITY_DAYS};

    #[test]
    fn from_new_fills_placeholders_and_defaults() {
        let company = Company::from_new(NewCompany::named("Acme"), 14, 1_000);

        assert_eq!(company.emails, vec![String::new()]);
        assert_eq!(company.phone_numbers, vec![String::new()]);
        assert_eq!(company.communication_periodicity, 14);
        assert_eq!(company.last_communication_date, Some(1_000));
        assert_eq!(company.last_communication_sequence, 0);
        assert_eq!(company.created_at, 1_000);
    }

    #[test]
    fn zero_periodicity_reads_as_default() {
        let mut company = Company::from_new(NewCompany::named("Acme"), 7, 0);
        let mut patch = CompanyPatch::for_company(company.id);
        patch.communication_periodicity = Some(0);
        company.apply_patch(&patch);

        assert_eq!(company.communication_periodicity, 0);
        assert_eq!(
            company.effective_periodicity_days(),
            DEFAULT_PERIODICITY_DAYS
        );
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let company = Company::from_new(NewCompany::named("Acme"), 14, 5);
        let mut patched = company.clone();
        patched.apply_patch(&CompanyPatch::for_company(company.id));
        assert_eq!(patched, company);
    }
}
