use chrono::NaiveDate;

use super::observation::{Observation, ObservationKind};
use crate::domain::{
    EmployeeRecord, Employer, EmploymentAgreement, EmploymentRecord, FreelanceRecord,
    LeaveOfAbsence, YearMonth,
};

pub(super) const EMPLOYEE: &str = "EmployeeRecord";
pub(super) const FREELANCER: &str = "FreelanceRecord";
pub(super) const AGREEMENT: &str = "EmploymentAgreement";
pub(super) const LEAVE: &str = "LeaveOfAbsence";
pub(super) const HISTORY: &str = "EmploymentHistory";

fn observe(
    out: &mut Vec<Observation>,
    subject: &'static str,
    field: &'static str,
    kind: ObservationKind,
    description: String,
) {
    out.push(Observation {
        subject,
        field,
        kind,
        description,
    });
}

pub(super) fn employee_observations(
    record: &EmployeeRecord,
    today: NaiveDate,
) -> Vec<Observation> {
    let mut out = Vec::new();

    check_start_before_end(&mut out, EMPLOYEE, record.start_date(), record.end_date());
    check_not_in_future(&mut out, EMPLOYEE, "end_date", record.end_date(), today);
    check_employer(&mut out, EMPLOYEE, record.employer());

    for leave in record.leaves() {
        leave_observations(&mut out, leave);
    }

    for agreement in record.agreements() {
        agreement_observations(&mut out, agreement);
    }

    let mut codes: Vec<&str> = Vec::new();
    for agreement in record.agreements() {
        if !codes.contains(&agreement.occupation_code()) {
            codes.push(agreement.occupation_code());
        }
    }
    let distinct = codes.len();
    if distinct > 1 {
        observe(
            &mut out,
            EMPLOYEE,
            "agreements",
            ObservationKind::DistinctOccupationsOnRecord,
            format!("employment has {distinct} different occupation codes"),
        );
    }

    out
}

pub(super) fn freelancer_observations(
    record: &FreelanceRecord,
    today: NaiveDate,
) -> Vec<Observation> {
    let mut out = Vec::new();

    check_start_before_end(&mut out, FREELANCER, record.start_date, record.end_date);
    check_not_in_future(&mut out, FREELANCER, "end_date", record.end_date, today);
    check_not_blank(&mut out, FREELANCER, "occupation_code", &record.occupation_code);
    check_employer(&mut out, FREELANCER, &record.employer);

    out
}

/// Freelance engagements that do not touch the requested months at all.
pub(super) fn window_observations(
    records: &[EmploymentRecord],
    from: YearMonth,
    to: YearMonth,
) -> Vec<Observation> {
    let mut out = Vec::new();
    let window_start = from.first_day();
    let window_end = to.last_day();

    for record in records.iter().filter_map(|record| match record {
        EmploymentRecord::Freelancer(freelancer) => Some(freelancer),
        EmploymentRecord::Employee(_) => None,
    }) {
        let starts_after = record.start_date > window_end;
        let ended_before = record.end_date.is_some_and(|end| end < window_start);
        if starts_after || ended_before {
            observe(
                &mut out,
                FREELANCER,
                "start_date,end_date",
                ObservationKind::OutsideRequestedPeriod,
                format!(
                    "engagement {} to {} lies outside requested period {from} to {to}",
                    record.start_date,
                    record
                        .end_date
                        .map(|end| end.to_string())
                        .unwrap_or_else(|| "open".to_string()),
                ),
            );
        }
    }

    out
}

/// Groups records by employer and reports employers with more than one record.
pub(super) fn history_observations(records: &[EmploymentRecord]) -> Vec<Observation> {
    let mut out = Vec::new();
    let mut groups: Vec<(&Employer, Vec<&EmploymentRecord>)> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|(employer, _)| *employer == record.employer())
        {
            Some((_, members)) => members.push(record),
            None => groups.push((record.employer(), vec![record])),
        }
    }

    for (employer, members) in groups.iter().filter(|(_, members)| members.len() > 1) {
        observe(
            &mut out,
            HISTORY,
            "employer",
            ObservationKind::RecordsAtSameEmployer,
            format!(
                "{} records share one {} employer",
                members.len(),
                employer.kind()
            ),
        );

        let mut occupations: Vec<&str> = Vec::new();
        for member in members {
            let occupation = primary_occupation(member);
            if !occupations.contains(&occupation) {
                occupations.push(occupation);
            }
        }

        if occupations.len() == 1 {
            observe(
                &mut out,
                HISTORY,
                "occupation_code",
                ObservationKind::SameEmployerSameOccupation,
                format!("{} records at one employer share an occupation", members.len()),
            );
        } else {
            observe(
                &mut out,
                HISTORY,
                "occupation_code",
                ObservationKind::SameEmployerDifferentOccupation,
                format!(
                    "{} records at one employer have {} different occupations",
                    members.len(),
                    occupations.len()
                ),
            );
        }
    }

    out
}

fn primary_occupation(record: &EmploymentRecord) -> &str {
    match record {
        EmploymentRecord::Employee(employee) => employee
            .current_agreement()
            .map(EmploymentAgreement::occupation_code)
            .unwrap_or_default(),
        EmploymentRecord::Freelancer(freelancer) => &freelancer.occupation_code,
    }
}

fn agreement_observations(out: &mut Vec<Observation>, agreement: &EmploymentAgreement) {
    check_not_blank(out, AGREEMENT, "occupation_code", agreement.occupation_code());

    match agreement.employment_percentage() {
        Some(percentage) => {
            observe(
                out,
                AGREEMENT,
                "employment_percentage",
                ObservationKind::ValuePresent,
                "employment_percentage is present".to_string(),
            );
            check_percentage(out, AGREEMENT, "employment_percentage", percentage);
        }
        None => observe(
            out,
            AGREEMENT,
            "employment_percentage",
            ObservationKind::ValueMissing,
            "missing field: employment_percentage is absent".to_string(),
        ),
    }

    if let EmploymentAgreement::Historical(historical) = agreement {
        check_from_before_to(out, AGREEMENT, historical.from, Some(historical.to));
    }
}

fn leave_observations(out: &mut Vec<Observation>, leave: &LeaveOfAbsence) {
    check_percentage(out, LEAVE, "percentage", leave.percentage);
    check_from_before_to(out, LEAVE, leave.from, leave.to);
}

fn check_employer(out: &mut Vec<Observation>, subject: &'static str, employer: &Employer) {
    let (kind, description) = match employer {
        Employer::Organization(_) => (
            ObservationKind::EmployerIsOrganization,
            "employer is an organization",
        ),
        Employer::Person(_) => (ObservationKind::EmployerIsPerson, "employer is a person"),
        Employer::GovernmentActor(_) => (
            ObservationKind::EmployerIsGovernmentActor,
            "employer is a government actor",
        ),
    };
    observe(out, subject, "employer", kind, description.to_string());
}

fn check_not_blank(
    out: &mut Vec<Observation>,
    subject: &'static str,
    field: &'static str,
    value: &str,
) {
    if value.trim().is_empty() {
        observe(
            out,
            subject,
            field,
            ObservationKind::BlankValue,
            format!("blank field: {field} is empty or whitespace"),
        );
    } else {
        observe(
            out,
            subject,
            field,
            ObservationKind::HasValue,
            format!("{field} has a value"),
        );
    }
}

fn check_percentage(
    out: &mut Vec<Observation>,
    subject: &'static str,
    field: &'static str,
    percentage: f64,
) {
    if percentage < 0.0 {
        observe(
            out,
            subject,
            field,
            ObservationKind::PercentageBelowZero,
            format!("invalid percentage: {percentage} % is below 0 %"),
        );
    }

    if percentage > 100.0 {
        observe(
            out,
            subject,
            field,
            ObservationKind::PercentageAboveHundred,
            format!("invalid percentage: {percentage} % is above 100 %"),
        );
    }
}

fn check_not_in_future(
    out: &mut Vec<Observation>,
    subject: &'static str,
    field: &'static str,
    date: Option<NaiveDate>,
    today: NaiveDate,
) {
    if let Some(date) = date.filter(|date| *date > today) {
        observe(
            out,
            subject,
            field,
            ObservationKind::DateInFuture,
            format!("invalid date: {date} is in the future"),
        );
    }
}

fn check_from_before_to(
    out: &mut Vec<Observation>,
    subject: &'static str,
    from: NaiveDate,
    to: Option<NaiveDate>,
) {
    if let Some(to) = to.filter(|to| from > *to) {
        observe(
            out,
            subject,
            "from,to",
            ObservationKind::FromDateAfterToDate,
            format!("invalid date: {from} is after {to}"),
        );
    }
}

fn check_start_before_end(
    out: &mut Vec<Observation>,
    subject: &'static str,
    start: NaiveDate,
    end: Option<NaiveDate>,
) {
    if let Some(end) = end.filter(|end| start > *end) {
        observe(
            out,
            subject,
            "start_date,end_date",
            ObservationKind::StartDateAfterEndDate,
            format!("invalid date: start {start} is after end {end}"),
        );
    }
}
