use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::error::{employment_registry_error, LookupError};
use crate::domain::{EmployeeRecord, EmploymentRecord};
use crate::mapping::{map_agreements, map_employee_record};
use crate::probe::QualityProbe;
use crate::registry::{EmploymentRegistry, RawAgreement};

/// Ordinary employments from the employment registry, each enriched with its
/// full agreement history.
pub struct EmployeeService<R> {
    registry: Arc<R>,
    probe: QualityProbe,
}

impl<R> EmployeeService<R>
where
    R: EmploymentRegistry + 'static,
{
    pub fn new(registry: Arc<R>, probe: QualityProbe) -> Self {
        Self { registry, probe }
    }

    /// History lookups are all-or-nothing: the first failing one fails the call.
    pub fn find_employment_records(
        &self,
        person_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<EmploymentRecord>, LookupError> {
        let raw = self
            .registry
            .find_for_period(person_id, from, to)
            .map_err(employment_registry_error)?;

        let mapped: Vec<EmployeeRecord> = raw.iter().filter_map(map_employee_record).collect();

        let mut histories = Vec::with_capacity(mapped.len());
        for record in &mapped {
            let history = self
                .registry
                .find_history(record.employment_id())
                .map_err(employment_registry_error)?;
            histories.push(history);
        }

        let records: Vec<EmploymentRecord> = mapped
            .iter()
            .zip(histories)
            .filter_map(|(record, history)| enrich(record, &history))
            .map(EmploymentRecord::from)
            .collect();

        for record in &records {
            self.probe.inspect(record);
        }

        debug!(
            received = raw.len(),
            returned = records.len(),
            "employment records resolved"
        );

        Ok(records)
    }
}

fn enrich(record: &EmployeeRecord, history: &[RawAgreement]) -> Option<EmployeeRecord> {
    let enriched = map_agreements(history).and_then(|agreements| record.with_agreements(agreements));

    match enriched {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(
                reference = record.employment_id().0,
                error = %err,
                "excluding employment whose agreement history fails validation"
            );
            None
        }
    }
}
