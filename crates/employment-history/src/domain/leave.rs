use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave or temporary layoff registered on an employment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveOfAbsence {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub percentage: f64,
    pub reason: String,
}
