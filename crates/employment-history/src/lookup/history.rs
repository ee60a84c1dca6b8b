use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::employee::EmployeeService;
use super::error::LookupError;
use super::freelance::FreelanceService;
use crate::domain::{EmploymentRecord, YearMonth};
use crate::probe::QualityProbe;
use crate::registry::{EmploymentRegistry, IncomeRegistry};

/// Combined employment history of one person across both registries.
pub struct EmploymentHistoryService<R, I> {
    employees: EmployeeService<R>,
    freelancers: FreelanceService<I>,
    probe: QualityProbe,
}

impl<R, I> EmploymentHistoryService<R, I>
where
    R: EmploymentRegistry + 'static,
    I: IncomeRegistry + 'static,
{
    pub fn new(employment: Arc<R>, income: Arc<I>, probe: QualityProbe) -> Self {
        Self {
            employees: EmployeeService::new(employment, probe.clone()),
            freelancers: FreelanceService::new(income, probe.clone()),
            probe,
        }
    }

    /// Freelance records first, then employee records, each in registry order.
    ///
    /// The income registry is queried first; if it fails the employment
    /// registry is not contacted. Records are never merged or deduplicated.
    pub fn find_employment_history(
        &self,
        person_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<EmploymentRecord>, LookupError> {
        let mut records = self.freelancers.find_freelance_records(
            person_id,
            YearMonth::from_date(from),
            YearMonth::from_date(to),
        )?;
        let freelance = records.len();

        records.extend(self.employees.find_employment_records(person_id, from, to)?);

        self.probe.inspect_history(&records);

        info!(
            freelance,
            employee = records.len() - freelance,
            %from,
            %to,
            "employment history assembled"
        );

        Ok(records)
    }
}
