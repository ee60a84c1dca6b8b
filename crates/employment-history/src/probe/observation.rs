use serde::Serialize;

/// Closed set of data-quality findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationKind {
    PercentageBelowZero,
    PercentageAboveHundred,
    FromDateAfterToDate,
    StartDateAfterEndDate,
    DateInFuture,
    ValueMissing,
    ValuePresent,
    BlankValue,
    HasValue,
    DistinctOccupationsOnRecord,
    EmployerIsGovernmentActor,
    EmployerIsPerson,
    EmployerIsOrganization,
    RecordsAtSameEmployer,
    SameEmployerSameOccupation,
    SameEmployerDifferentOccupation,
    OutsideRequestedPeriod,
}

impl ObservationKind {
    pub fn label(&self) -> &'static str {
        match self {
            ObservationKind::PercentageBelowZero => "percentage_below_zero",
            ObservationKind::PercentageAboveHundred => "percentage_above_hundred",
            ObservationKind::FromDateAfterToDate => "from_date_after_to_date",
            ObservationKind::StartDateAfterEndDate => "start_date_after_end_date",
            ObservationKind::DateInFuture => "date_in_future",
            ObservationKind::ValueMissing => "value_missing",
            ObservationKind::ValuePresent => "value_present",
            ObservationKind::BlankValue => "blank_value",
            ObservationKind::HasValue => "has_value",
            ObservationKind::DistinctOccupationsOnRecord => "distinct_occupations_on_record",
            ObservationKind::EmployerIsGovernmentActor => "employer_is_government_actor",
            ObservationKind::EmployerIsPerson => "employer_is_person",
            ObservationKind::EmployerIsOrganization => "employer_is_organization",
            ObservationKind::RecordsAtSameEmployer => "records_at_same_employer",
            ObservationKind::SameEmployerSameOccupation => "same_employer_same_occupation",
            ObservationKind::SameEmployerDifferentOccupation => {
                "same_employer_different_occupation"
            }
            ObservationKind::OutsideRequestedPeriod => "outside_requested_period",
        }
    }
}

/// One finding about one field of one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    /// Type name of the inspected value, e.g. `LeaveOfAbsence`.
    pub subject: &'static str,
    pub field: &'static str,
    pub kind: ObservationKind,
    pub description: String,
}
