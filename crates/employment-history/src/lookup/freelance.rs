use std::sync::Arc;

use tracing::debug;

use super::error::{income_registry_error, LookupError};
use crate::domain::{EmploymentRecord, YearMonth};
use crate::mapping::map_freelance_record;
use crate::probe::QualityProbe;
use crate::registry::IncomeRegistry;

/// Freelance engagements derived from income reported to the income registry.
pub struct FreelanceService<I> {
    registry: Arc<I>,
    probe: QualityProbe,
}

impl<I> FreelanceService<I>
where
    I: IncomeRegistry + 'static,
{
    pub fn new(registry: Arc<I>, probe: QualityProbe) -> Self {
        Self { registry, probe }
    }

    pub fn find_freelance_records(
        &self,
        person_id: &str,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<EmploymentRecord>, LookupError> {
        let raw = self
            .registry
            .find_freelance_income(person_id, from, to)
            .map_err(income_registry_error)?;

        let records: Vec<EmploymentRecord> = raw
            .iter()
            .filter_map(map_freelance_record)
            .map(EmploymentRecord::from)
            .collect();

        self.probe.freelance_records(&records, from, to);
        for record in &records {
            self.probe.inspect(record);
        }

        debug!(
            received = raw.len(),
            returned = records.len(),
            "freelance records resolved"
        );

        Ok(records)
    }
}
