//! Data-quality inspection of finished domain records.
//!
//! The probe only reports. It never rejects or alters a record; each finding
//! is logged and counted, and also returned so callers and tests can see it.

mod observation;
mod rules;
mod sink;

pub use observation::{Observation, ObservationKind};
pub use sink::{
    MetricsSink, PrometheusSink, AGREEMENT_COUNT, COUNT_BUCKETS, FREELANCE_RECORDS_TOTAL,
    HISTORY_SIZE, OBSERVATIONS_TOTAL,
};

#[cfg(test)]
pub(crate) use sink::RecordingSink;

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::domain::{EmployeeRecord, EmploymentRecord, FreelanceRecord, YearMonth};

/// Stateless inspector; safe to share between requests.
#[derive(Clone)]
pub struct QualityProbe {
    sink: Arc<dyn MetricsSink>,
    reference_date: Option<NaiveDate>,
}

impl QualityProbe {
    pub fn new(sink: Arc<dyn MetricsSink>) -> Self {
        Self {
            sink,
            reference_date: None,
        }
    }

    /// Pins "today" for the future-date check instead of reading the clock.
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = Some(reference_date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn inspect(&self, record: &EmploymentRecord) -> Vec<Observation> {
        match record {
            EmploymentRecord::Employee(employee) => self.inspect_employee(employee),
            EmploymentRecord::Freelancer(freelancer) => self.inspect_freelancer(freelancer),
        }
    }

    pub fn inspect_employee(&self, record: &EmployeeRecord) -> Vec<Observation> {
        self.sink.agreement_count(record.agreements().len());
        self.report(rules::employee_observations(record, self.today()))
    }

    pub fn inspect_freelancer(&self, record: &FreelanceRecord) -> Vec<Observation> {
        self.report(rules::freelancer_observations(record, self.today()))
    }

    /// Counts a freelance batch and flags entries outside `from..=to`.
    pub fn freelance_records(
        &self,
        records: &[EmploymentRecord],
        from: YearMonth,
        to: YearMonth,
    ) -> Vec<Observation> {
        self.sink.freelance_records(records.len() as u64);
        self.report(rules::window_observations(records, from, to))
    }

    pub fn inspect_history(&self, records: &[EmploymentRecord]) -> Vec<Observation> {
        self.sink.history_size(records.len());
        self.report(rules::history_observations(records))
    }

    fn report(&self, observations: Vec<Observation>) -> Vec<Observation> {
        for observation in &observations {
            info!(
                subject = observation.subject,
                field = observation.field,
                kind = observation.kind.label(),
                "{}",
                observation.description
            );
            self.sink.observation(observation);
        }
        observations
    }
}
