//! Normalized employment model shared by both registries.
//!
//! Every type here is an immutable value. Structural rules are enforced when a
//! value is built; plausibility (percentages, date order) is left to the
//! quality probe.

mod agreement;
mod employer;
mod leave;
mod month;
mod organization;
mod record;

pub use agreement::{CurrentAgreement, EmploymentAgreement, HistoricalAgreement};
pub use employer::Employer;
pub use leave::LeaveOfAbsence;
pub use month::YearMonth;
pub use organization::{check_digit, is_valid_organization_id, OrganizationId};
pub use record::{EmployeeRecord, EmploymentId, EmploymentRecord, FreelanceRecord};

/// Raised while building domain values from upstream data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("organization number '{0}' fails the MOD-11 check")]
    InvalidIdentifier(String),
    #[error("employment has no agreements")]
    NoAgreements,
    #[error("employment has no current agreement")]
    NoCurrentAgreement,
    #[error("employment has {0} current agreements, expected exactly one")]
    MultipleCurrentAgreements(usize),
    #[error("unable to parse '{value}' as a date")]
    InvalidDate { value: String },
}
