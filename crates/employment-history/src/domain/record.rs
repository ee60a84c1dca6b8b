use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DomainError, Employer, EmploymentAgreement, LeaveOfAbsence};

/// Identifier the employment registry assigns to each employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmploymentId(pub i64);

/// Ordinary employment from the employment registry.
///
/// Invariant: at least one agreement, and exactly one of them current.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    employer: Employer,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    employment_id: EmploymentId,
    agreements: Vec<EmploymentAgreement>,
    leaves: Vec<LeaveOfAbsence>,
}

impl EmployeeRecord {
    pub fn new(
        employer: Employer,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        employment_id: EmploymentId,
        agreements: Vec<EmploymentAgreement>,
        leaves: Vec<LeaveOfAbsence>,
    ) -> Result<Self, DomainError> {
        validate_agreements(&agreements)?;

        Ok(Self {
            employer,
            start_date,
            end_date,
            employment_id,
            agreements,
            leaves,
        })
    }

    /// Copy of this record carrying `agreements` instead, subject to the same invariants.
    pub fn with_agreements(
        &self,
        agreements: Vec<EmploymentAgreement>,
    ) -> Result<Self, DomainError> {
        validate_agreements(&agreements)?;

        Ok(Self {
            agreements,
            ..self.clone()
        })
    }

    pub fn employer(&self) -> &Employer {
        &self.employer
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn employment_id(&self) -> EmploymentId {
        self.employment_id
    }

    pub fn agreements(&self) -> &[EmploymentAgreement] {
        &self.agreements
    }

    pub fn leaves(&self) -> &[LeaveOfAbsence] {
        &self.leaves
    }

    pub fn current_agreement(&self) -> Option<&EmploymentAgreement> {
        self.agreements.iter().find(|agreement| agreement.is_current())
    }
}

fn validate_agreements(agreements: &[EmploymentAgreement]) -> Result<(), DomainError> {
    if agreements.is_empty() {
        return Err(DomainError::NoAgreements);
    }

    match agreements
        .iter()
        .filter(|agreement| agreement.is_current())
        .count()
    {
        0 => Err(DomainError::NoCurrentAgreement),
        1 => Ok(()),
        count => Err(DomainError::MultipleCurrentAgreements(count)),
    }
}

/// Freelance assignment reported through the income registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreelanceRecord {
    pub employer: Employer,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub occupation_code: String,
}

/// One employment relationship, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmploymentRecord {
    Employee(EmployeeRecord),
    Freelancer(FreelanceRecord),
}

impl EmploymentRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            EmploymentRecord::Employee(_) => "Employee",
            EmploymentRecord::Freelancer(_) => "Freelancer",
        }
    }

    pub fn employer(&self) -> &Employer {
        match self {
            EmploymentRecord::Employee(record) => record.employer(),
            EmploymentRecord::Freelancer(record) => &record.employer,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        match self {
            EmploymentRecord::Employee(record) => record.start_date(),
            EmploymentRecord::Freelancer(record) => record.start_date,
        }
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        match self {
            EmploymentRecord::Employee(record) => record.end_date(),
            EmploymentRecord::Freelancer(record) => record.end_date,
        }
    }

    /// Distinct occupation codes, in first-seen order.
    pub fn occupation_codes(&self) -> Vec<&str> {
        match self {
            EmploymentRecord::Employee(record) => {
                let mut codes: Vec<&str> = Vec::new();
                for agreement in record.agreements() {
                    if !codes.contains(&agreement.occupation_code()) {
                        codes.push(agreement.occupation_code());
                    }
                }
                codes
            }
            EmploymentRecord::Freelancer(record) => vec![record.occupation_code.as_str()],
        }
    }
}

impl From<EmployeeRecord> for EmploymentRecord {
    fn from(value: EmployeeRecord) -> Self {
        Self::Employee(value)
    }
}

impl From<FreelanceRecord> for EmploymentRecord {
    fn from(value: FreelanceRecord) -> Self {
        Self::Freelancer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrentAgreement, HistoricalAgreement, OrganizationId};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn employer() -> Employer {
        Employer::Organization(OrganizationId::new("995298775").expect("valid"))
    }

    fn current(occupation: &str) -> EmploymentAgreement {
        EmploymentAgreement::Current(CurrentAgreement {
            occupation_code: occupation.to_string(),
            employment_percentage: Some(100.0),
            from: date(2019, 1, 1),
        })
    }

    fn historical(occupation: &str) -> EmploymentAgreement {
        EmploymentAgreement::Historical(HistoricalAgreement {
            occupation_code: occupation.to_string(),
            employment_percentage: Some(100.0),
            from: date(2018, 1, 1),
            to: date(2018, 12, 31),
        })
    }

    fn employee(agreements: Vec<EmploymentAgreement>) -> Result<EmployeeRecord, DomainError> {
        EmployeeRecord::new(
            employer(),
            date(2018, 1, 1),
            None,
            EmploymentId(1234),
            agreements,
            Vec::new(),
        )
    }

    #[test]
    fn employee_requires_at_least_one_agreement() {
        assert_eq!(employee(Vec::new()), Err(DomainError::NoAgreements));
    }

    #[test]
    fn employee_requires_a_current_agreement() {
        assert_eq!(
            employee(vec![historical("BUTIKKMEDARBEIDER")]),
            Err(DomainError::NoCurrentAgreement)
        );
    }

    #[test]
    fn employee_rejects_two_current_agreements() {
        assert_eq!(
            employee(vec![current("BUTIKKMEDARBEIDER"), current("BUTIKKMEDARBEIDER")]),
            Err(DomainError::MultipleCurrentAgreements(2))
        );
    }

    #[test]
    fn employee_accepts_one_current_among_historical() {
        let record = employee(vec![historical("KOKK"), current("BUTIKKMEDARBEIDER")])
            .expect("valid agreements");
        assert_eq!(
            record
                .current_agreement()
                .map(EmploymentAgreement::occupation_code),
            Some("BUTIKKMEDARBEIDER")
        );
    }

    #[test]
    fn with_agreements_replaces_list_and_rechecks_invariants() {
        let record = employee(vec![current("KOKK")]).expect("valid");

        let enriched = record
            .with_agreements(vec![current("KOKK"), historical("SERVITØR")])
            .expect("enriched list is valid");
        assert_eq!(enriched.agreements().len(), 2);
        assert_eq!(enriched.employment_id(), record.employment_id());
        assert_eq!(record.agreements().len(), 1, "original is untouched");

        assert_eq!(
            record.with_agreements(vec![historical("KOKK")]),
            Err(DomainError::NoCurrentAgreement)
        );
    }

    #[test]
    fn occupation_codes_are_distinct_in_order() {
        let record: EmploymentRecord = employee(vec![
            historical("KOKK"),
            historical("SERVITØR"),
            current("KOKK"),
        ])
        .expect("valid")
        .into();
        assert_eq!(record.occupation_codes(), vec!["KOKK", "SERVITØR"]);
        assert_eq!(record.kind(), "Employee");
    }
}
