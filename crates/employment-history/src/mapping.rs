//! Translation from registry records to the domain model.
//!
//! Mapping is lossy on purpose: a record whose employer cannot be classified,
//! or which fails domain validation, is logged and left out of the result
//! rather than failing the lookup.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{error, warn};

use crate::domain::{
    CurrentAgreement, DomainError, EmployeeRecord, Employer, EmploymentAgreement, EmploymentId,
    FreelanceRecord, HistoricalAgreement, LeaveOfAbsence, OrganizationId,
};
use crate::registry::{RawAgreement, RawEmployer, RawEmploymentRecord, RawIncomeRecord, RawLeave};

/// Why a registry record was left out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("unknown employer type: {0}")]
    UnrecognizedEmployer(String),
    #[error(transparent)]
    InvalidDomainData(#[from] DomainError),
}

/// Parses a registry date: a plain `YYYY-MM-DD`, or a timestamp whose local calendar date is used.
pub fn parse_registry_date(value: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    Err(DomainError::InvalidDate {
        value: value.to_string(),
    })
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    value.map(parse_registry_date).transpose()
}

pub fn map_employer(raw: &RawEmployer) -> Result<Employer, MappingError> {
    match raw {
        RawEmployer::Organization { org_number } => {
            Ok(Employer::Organization(OrganizationId::new(org_number.as_str())?))
        }
        RawEmployer::Person { national_id } => Ok(Employer::Person(national_id.clone())),
        RawEmployer::Actor { actor_id } => Ok(Employer::GovernmentActor(actor_id.clone())),
        RawEmployer::LegacyEmployer { employer_number } => Err(
            MappingError::UnrecognizedEmployer(format!("legacy employer {employer_number}")),
        ),
        RawEmployer::Unrecognized => {
            Err(MappingError::UnrecognizedEmployer("unrecognized".to_string()))
        }
    }
}

/// An agreement without end of validity is the current one; any other is historical.
pub fn map_agreement(raw: &RawAgreement) -> Result<EmploymentAgreement, DomainError> {
    let from = parse_registry_date(&raw.valid_from)?;

    match parse_optional_date(raw.valid_to.as_deref())? {
        None => Ok(EmploymentAgreement::Current(CurrentAgreement {
            occupation_code: raw.occupation.clone(),
            employment_percentage: raw.employment_percentage,
            from,
        })),
        Some(to) => Ok(EmploymentAgreement::Historical(HistoricalAgreement {
            occupation_code: raw.occupation.clone(),
            employment_percentage: raw.employment_percentage,
            from,
            to,
        })),
    }
}

pub fn map_agreements(raw: &[RawAgreement]) -> Result<Vec<EmploymentAgreement>, DomainError> {
    raw.iter().map(map_agreement).collect()
}

pub fn map_leave(raw: &RawLeave) -> Result<LeaveOfAbsence, DomainError> {
    Ok(LeaveOfAbsence {
        from: parse_registry_date(&raw.period.from)?,
        to: parse_optional_date(raw.period.to.as_deref())?,
        percentage: raw.percentage,
        reason: raw.reason.clone(),
    })
}

pub fn try_map_employee_record(raw: &RawEmploymentRecord) -> Result<EmployeeRecord, MappingError> {
    let employer = map_employer(&raw.employer)?;
    let leaves = raw
        .leaves
        .iter()
        .map(map_leave)
        .collect::<Result<Vec<_>, _>>()?;

    let record = EmployeeRecord::new(
        employer,
        parse_registry_date(&raw.employment_period.from)?,
        parse_optional_date(raw.employment_period.to.as_deref())?,
        EmploymentId(raw.record_id),
        map_agreements(&raw.agreements)?,
        leaves,
    )?;

    Ok(record)
}

/// Maps an employment registry record, or `None` when it has to be excluded.
pub fn map_employee_record(raw: &RawEmploymentRecord) -> Option<EmployeeRecord> {
    match try_map_employee_record(raw) {
        Ok(record) => Some(record),
        Err(err) => {
            log_exclusion("employment", raw.record_id.to_string(), &err);
            None
        }
    }
}

pub fn try_map_freelance_record(raw: &RawIncomeRecord) -> Result<FreelanceRecord, MappingError> {
    Ok(FreelanceRecord {
        employer: map_employer(&raw.employer)?,
        start_date: parse_registry_date(&raw.freelance_period.from)?,
        end_date: parse_optional_date(raw.freelance_period.to.as_deref())?,
        occupation_code: raw.occupation.clone().unwrap_or_default(),
    })
}

/// Maps a freelance income record, or `None` when it has to be excluded.
pub fn map_freelance_record(raw: &RawIncomeRecord) -> Option<FreelanceRecord> {
    match try_map_freelance_record(raw) {
        Ok(record) => Some(record),
        Err(err) => {
            log_exclusion("freelance", raw.freelance_period.from.clone(), &err);
            None
        }
    }
}

fn log_exclusion(source: &'static str, reference: String, err: &MappingError) {
    match err {
        MappingError::UnrecognizedEmployer(_) => {
            error!(source, reference = %reference, error = %err, "excluding record with unknown employer type")
        }
        MappingError::InvalidDomainData(_) => {
            warn!(source, reference = %reference, error = %err, "excluding record that fails validation")
        }
    }
}
