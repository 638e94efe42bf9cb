//! Tracker configuration and the default method seed.
//!
//! # Responsibility
//! - Provide the fixed five-step seed cadence used by a fresh store.
//! - Parse optional JSON overrides and validate them before use.
//!
//! # Invariants
//! - `TrackerConfig::default()` reproduces the seed exactly: LinkedIn Post,
//!   LinkedIn Message, Email (mandatory), Phone Call, Other with sequences
//!   1 through 5.
//! - Seed entries have non-blank names and positive sequences.

use crate::model::company::DEFAULT_PERIODICITY_DAYS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of communications shown by the recent-history preview.
pub const DEFAULT_HISTORY_PREVIEW_LIMIT: usize = 5;

/// One method entry of the initial cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sequence: u32,
    #[serde(default)]
    pub is_mandatory: bool,
}

impl MethodSeed {
    fn new(name: &str, description: &str, sequence: u32, is_mandatory: bool) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            sequence,
            is_mandatory,
        }
    }
}

/// Returns the built-in five-step outreach cadence.
pub fn default_method_seed() -> Vec<MethodSeed> {
    vec![
        MethodSeed::new("LinkedIn Post", "Post on LinkedIn", 1, false),
        MethodSeed::new(
            "LinkedIn Message",
            "Send a direct message on LinkedIn",
            2,
            false,
        ),
        MethodSeed::new("Email", "Send an email", 3, true),
        MethodSeed::new("Phone Call", "Make a phone call", 4, false),
        MethodSeed::new("Other", "Other communication method", 5, false),
    ]
}

/// Store and service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Periodicity given to companies added without one.
    pub default_periodicity_days: u32,
    /// Cap for the configurable recent-history preview. Positive.
    pub history_preview_limit: usize,
    /// Methods present in a fresh store, in insertion order.
    pub seed_methods: Vec<MethodSeed>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_periodicity_days: DEFAULT_PERIODICITY_DAYS,
            history_preview_limit: DEFAULT_HISTORY_PREVIEW_LIMIT,
            seed_methods: default_method_seed(),
        }
    }
}

impl TrackerConfig {
    /// Parses a JSON document; absent fields keep their defaults.
    ///
    /// # Errors
    /// - [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    /// - Any [`TrackerConfig::validate`] failure.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_periodicity_days == 0 {
            return Err(ConfigError::ZeroPeriodicity);
        }
        if self.history_preview_limit == 0 {
            return Err(ConfigError::ZeroPreviewLimit);
        }
        for seed in &self.seed_methods {
            if seed.name.trim().is_empty() {
                return Err(ConfigError::BlankMethodName);
            }
            if seed.sequence == 0 {
                return Err(ConfigError::ZeroSequence(seed.name.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration parse/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    ZeroPeriodicity,
    ZeroPreviewLimit,
    BlankMethodName,
    ZeroSequence(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid tracker config: {err}"),
            Self::ZeroPeriodicity => write!(f, "default_periodicity_days must be positive"),
            Self::ZeroPreviewLimit => write!(f, "history_preview_limit must be positive"),
            Self::BlankMethodName => write!(f, "seed method name must not be blank"),
            Self::ZeroSequence(name) => {
                write!(f, "seed method `{name}` must have a positive sequence")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
