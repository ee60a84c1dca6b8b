use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::domain::{EmploymentId, YearMonth};
use crate::lookup::EmploymentHistoryService;
use crate::probe::{QualityProbe, RecordingSink};
use crate::registry::{
    EmploymentRegistry, FaultKind, IncomeRegistry, RawAgreement, RawEmployer,
    RawEmploymentRecord, RawIncomeRecord, RawLeave, RawPeriod, RegistryFault,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn month(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).expect("valid month")
}

pub(super) fn probe() -> (QualityProbe, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let probe = QualityProbe::new(sink.clone()).with_reference_date(date(2020, 6, 1));
    (probe, sink)
}

pub(super) fn organization(number: &str) -> RawEmployer {
    RawEmployer::Organization {
        org_number: number.to_string(),
    }
}

pub(super) fn period(from: &str, to: Option<&str>) -> RawPeriod {
    RawPeriod {
        from: from.to_string(),
        to: to.map(str::to_string),
    }
}

pub(super) fn agreement(occupation: &str, from: &str, to: Option<&str>) -> RawAgreement {
    RawAgreement {
        occupation: occupation.to_string(),
        employment_percentage: Some(100.0),
        valid_from: from.to_string(),
        valid_to: to.map(str::to_string),
    }
}

pub(super) fn employment(record_id: i64, employer: RawEmployer) -> RawEmploymentRecord {
    RawEmploymentRecord {
        record_id,
        employer,
        employment_period: period("2018-01-01", None),
        agreements: vec![agreement("KOKK", "2018-01-01", None)],
        leaves: Vec::<RawLeave>::new(),
    }
}

pub(super) fn freelance(employer: RawEmployer, occupation: &str) -> RawIncomeRecord {
    RawIncomeRecord {
        employer,
        freelance_period: period("2019-03-01", Some("2019-03-31")),
        occupation: Some(occupation.to_string()),
    }
}

pub(super) fn fault(kind: FaultKind) -> RegistryFault {
    RegistryFault::new(kind, format!("{kind} from stub"))
}

/// Employment registry double that records every call it receives.
#[derive(Default)]
pub(super) struct StubEmploymentRegistry {
    records: Vec<RawEmploymentRecord>,
    histories: HashMap<i64, Result<Vec<RawAgreement>, RegistryFault>>,
    period_fault: Option<RegistryFault>,
    period_calls: Mutex<Vec<(String, NaiveDate, NaiveDate)>>,
    history_calls: Mutex<Vec<EmploymentId>>,
}

impl StubEmploymentRegistry {
    pub(super) fn with_records(records: Vec<RawEmploymentRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub(super) fn failing(fault: RegistryFault) -> Self {
        Self {
            period_fault: Some(fault),
            ..Self::default()
        }
    }

    pub(super) fn history(mut self, record_id: i64, agreements: Vec<RawAgreement>) -> Self {
        self.histories.insert(record_id, Ok(agreements));
        self
    }

    pub(super) fn history_fault(mut self, record_id: i64, fault: RegistryFault) -> Self {
        self.histories.insert(record_id, Err(fault));
        self
    }

    pub(super) fn period_calls(&self) -> Vec<(String, NaiveDate, NaiveDate)> {
        self.period_calls
            .lock()
            .expect("registry mutex poisoned")
            .clone()
    }

    pub(super) fn history_calls(&self) -> Vec<EmploymentId> {
        self.history_calls
            .lock()
            .expect("registry mutex poisoned")
            .clone()
    }
}

impl EmploymentRegistry for StubEmploymentRegistry {
    fn find_for_period(
        &self,
        person_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawEmploymentRecord>, RegistryFault> {
        self.period_calls
            .lock()
            .expect("registry mutex poisoned")
            .push((person_id.to_string(), from, to));
        match &self.period_fault {
            Some(fault) => Err(fault.clone()),
            None => Ok(self.records.clone()),
        }
    }

    fn find_history(
        &self,
        employment_id: EmploymentId,
    ) -> Result<Vec<RawAgreement>, RegistryFault> {
        self.history_calls
            .lock()
            .expect("registry mutex poisoned")
            .push(employment_id);
        self.histories
            .get(&employment_id.0)
            .cloned()
            .unwrap_or_else(|| Err(fault(FaultKind::NotFound)))
    }
}

#[derive(Default)]
pub(super) struct StubIncomeRegistry {
    records: Vec<RawIncomeRecord>,
    fault: Option<RegistryFault>,
    calls: Mutex<Vec<(String, YearMonth, YearMonth)>>,
}

impl StubIncomeRegistry {
    pub(super) fn with_records(records: Vec<RawIncomeRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub(super) fn failing(fault: RegistryFault) -> Self {
        Self {
            fault: Some(fault),
            ..Self::default()
        }
    }

    pub(super) fn calls(&self) -> Vec<(String, YearMonth, YearMonth)> {
        self.calls.lock().expect("registry mutex poisoned").clone()
    }
}

impl IncomeRegistry for StubIncomeRegistry {
    fn find_freelance_income(
        &self,
        person_id: &str,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<RawIncomeRecord>, RegistryFault> {
        self.calls
            .lock()
            .expect("registry mutex poisoned")
            .push((person_id.to_string(), from, to));
        match &self.fault {
            Some(fault) => Err(fault.clone()),
            None => Ok(self.records.clone()),
        }
    }
}

pub(super) fn build_history_service(
    employment: StubEmploymentRegistry,
    income: StubIncomeRegistry,
) -> (
    EmploymentHistoryService<StubEmploymentRegistry, StubIncomeRegistry>,
    Arc<StubEmploymentRegistry>,
    Arc<StubIncomeRegistry>,
    Arc<RecordingSink>,
) {
    let employment = Arc::new(employment);
    let income = Arc::new(income);
    let (probe, sink) = probe();
    let service = EmploymentHistoryService::new(employment.clone(), income.clone(), probe);
    (service, employment, income, sink)
}
