//! Source services for each registry and the aggregation over both.

mod employee;
mod error;
mod freelance;
mod history;

#[cfg(test)]
mod tests;

pub use employee::EmployeeService;
pub use error::{employment_registry_error, income_registry_error, LookupError};
pub use freelance::FreelanceService;
pub use history::EmploymentHistoryService;
