use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Agreement still in force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentAgreement {
    pub occupation_code: String,
    pub employment_percentage: Option<f64>,
    pub from: NaiveDate,
}

/// Agreement superseded on `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalAgreement {
    pub occupation_code: String,
    pub employment_percentage: Option<f64>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Occupation and position size for part of an employment.
///
/// The percentage is not range checked here; implausible values are reported
/// by the quality probe instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmploymentAgreement {
    Current(CurrentAgreement),
    Historical(HistoricalAgreement),
}

impl EmploymentAgreement {
    pub fn occupation_code(&self) -> &str {
        match self {
            EmploymentAgreement::Current(agreement) => &agreement.occupation_code,
            EmploymentAgreement::Historical(agreement) => &agreement.occupation_code,
        }
    }

    pub fn employment_percentage(&self) -> Option<f64> {
        match self {
            EmploymentAgreement::Current(agreement) => agreement.employment_percentage,
            EmploymentAgreement::Historical(agreement) => agreement.employment_percentage,
        }
    }

    pub fn from(&self) -> NaiveDate {
        match self {
            EmploymentAgreement::Current(agreement) => agreement.from,
            EmploymentAgreement::Historical(agreement) => agreement.from,
        }
    }

    pub fn to(&self) -> Option<NaiveDate> {
        match self {
            EmploymentAgreement::Current(_) => None,
            EmploymentAgreement::Historical(agreement) => Some(agreement.to),
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, EmploymentAgreement::Current(_))
    }
}
