use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{
    EmploymentRegistry, FaultKind, IncomeRegistry, RawAgreement, RawEmploymentRecord,
    RawIncomeRecord, RawPeriod, RegistryFault,
};
use crate::domain::{EmploymentId, YearMonth};
use crate::mapping::parse_registry_date;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read registry fixture: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid registry fixture: {0}")]
    Json(#[from] serde_json::Error),
}

/// Both registries served from a JSON document instead of the upstream services.
///
/// Used for local runs and end-to-end tests. A fault configured under an
/// operation name (`find_for_period`, `find_history`, `find_freelance_income`)
/// is returned in place of data for every call to that operation.
#[derive(Debug, Default, Deserialize)]
pub struct FixtureRegistry {
    #[serde(default)]
    employment: HashMap<String, Vec<RawEmploymentRecord>>,
    #[serde(default)]
    history: HashMap<i64, Vec<RawAgreement>>,
    #[serde(default)]
    freelance: HashMap<String, Vec<RawIncomeRecord>>,
    #[serde(default)]
    faults: HashMap<String, RegistryFault>,
}

impl FixtureRegistry {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FixtureError> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn configured_fault(&self, operation: &str) -> Result<(), RegistryFault> {
        match self.faults.get(operation) {
            Some(fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }
}

impl EmploymentRegistry for FixtureRegistry {
    fn find_for_period(
        &self,
        person_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawEmploymentRecord>, RegistryFault> {
        self.configured_fault("find_for_period")?;

        let records = self
            .employment
            .get(person_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| overlaps(&record.employment_period, from, to))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(records)
    }

    fn find_history(
        &self,
        employment_id: EmploymentId,
    ) -> Result<Vec<RawAgreement>, RegistryFault> {
        self.configured_fault("find_history")?;

        self.history.get(&employment_id.0).cloned().ok_or_else(|| {
            RegistryFault::new(
                FaultKind::NotFound,
                format!("no agreement history for employment {}", employment_id.0),
            )
        })
    }
}

impl IncomeRegistry for FixtureRegistry {
    /// Selects entries whose period overlaps the requested months.
    fn find_freelance_income(
        &self,
        person_id: &str,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<RawIncomeRecord>, RegistryFault> {
        self.configured_fault("find_freelance_income")?;

        let records = self
            .freelance
            .get(person_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| {
                        overlaps(&record.freelance_period, from.first_day(), to.last_day())
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(records)
    }
}

/// Records with unparseable dates are kept so the mapper can report them.
fn overlaps(period: &RawPeriod, from: NaiveDate, to: NaiveDate) -> bool {
    let starts_before_end = parse_registry_date(&period.from)
        .map(|start| start <= to)
        .unwrap_or(true);
    let ends_after_start = match &period.to {
        Some(end) => parse_registry_date(end).map(|end| end >= from).unwrap_or(true),
        None => true,
    };
    starts_before_end && ends_after_start
}
