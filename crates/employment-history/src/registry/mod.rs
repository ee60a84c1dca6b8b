//! Capabilities the lookup services need from the two upstream registries.
//!
//! Transport, session handling and generated clients live outside this crate;
//! adapters implement these traits and report failures as [`RegistryFault`].

mod fixture;
mod raw;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{EmploymentId, YearMonth};

pub use fixture::{FixtureError, FixtureRegistry};
pub use raw::{
    RawAgreement, RawEmployer, RawEmploymentRecord, RawIncomeRecord, RawLeave, RawPeriod,
};

/// Employment registry: employments in a period, and the agreement history of one employment.
pub trait EmploymentRegistry: Send + Sync {
    fn find_for_period(
        &self,
        person_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawEmploymentRecord>, RegistryFault>;

    fn find_history(&self, employment_id: EmploymentId)
        -> Result<Vec<RawAgreement>, RegistryFault>;
}

/// Income registry, restricted to income reported for freelance work.
pub trait IncomeRegistry: Send + Sync {
    fn find_freelance_income(
        &self,
        person_id: &str,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<RawIncomeRecord>, RegistryFault>;
}

/// Failure category reported by a registry adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// Caller lacks access to the person (security restriction fault).
    SecurityRestriction,
    /// Request rejected as malformed.
    InvalidInput,
    /// Caller lacks access to the requested income filter.
    FilterAccessDenied,
    NotFound,
    Transport,
    Unexpected,
}

impl FaultKind {
    pub fn label(&self) -> &'static str {
        match self {
            FaultKind::SecurityRestriction => "security_restriction",
            FaultKind::InvalidInput => "invalid_input",
            FaultKind::FilterAccessDenied => "filter_access_denied",
            FaultKind::NotFound => "not_found",
            FaultKind::Transport => "transport",
            FaultKind::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind} fault from registry: {message}")]
pub struct RegistryFault {
    pub kind: FaultKind,
    pub message: String,
}

impl RegistryFault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
