//! Record shapes as delivered by the registries, before normalization.

use serde::{Deserialize, Serialize};

/// Interval as reported upstream; dates are unparsed strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPeriod {
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawEmployer {
    Organization { org_number: String },
    Person { national_id: String },
    Actor { actor_id: String },
    /// Pre-2015 employer numbering that has no counterpart in the domain model.
    LegacyEmployer { employer_number: String },
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEmploymentRecord {
    pub record_id: i64,
    pub employer: RawEmployer,
    pub employment_period: RawPeriod,
    #[serde(default)]
    pub agreements: Vec<RawAgreement>,
    #[serde(default)]
    pub leaves: Vec<RawLeave>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAgreement {
    pub occupation: String,
    #[serde(default)]
    pub employment_percentage: Option<f64>,
    pub valid_from: String,
    #[serde(default)]
    pub valid_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLeave {
    pub period: RawPeriod,
    pub percentage: f64,
    pub reason: String,
}

/// Freelance engagement attached to income reported for a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIncomeRecord {
    pub employer: RawEmployer,
    pub freelance_period: RawPeriod,
    #[serde(default)]
    pub occupation: Option<String>,
}
