//! Employment history lookup across the employment registry and the income
//! registry, with data-quality observations for every record returned.

pub mod config;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod mapping;
pub mod probe;
pub mod registry;
pub mod telemetry;
