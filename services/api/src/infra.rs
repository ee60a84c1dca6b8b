use axum_prometheus::utils::SECONDS_DURATION_BUCKETS;
use axum_prometheus::AXUM_HTTP_REQUESTS_DURATION_SECONDS;
use chrono::NaiveDate;
use employment_history::config::{ProbeConfig, RegistryConfig};
use employment_history::error::AppError;
use employment_history::probe::{
    PrometheusSink, QualityProbe, AGREEMENT_COUNT, COUNT_BUCKETS, HISTORY_SIZE,
};
use employment_history::registry::FixtureRegistry;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured registry fixture, or an empty registry when none is set.
pub(crate) fn build_registry(config: &RegistryConfig) -> Result<Arc<FixtureRegistry>, AppError> {
    match &config.fixture_path {
        Some(path) => {
            let registry = FixtureRegistry::from_path(path)?;
            info!(path = %path.display(), "registry fixture loaded");
            Ok(Arc::new(registry))
        }
        None => {
            warn!("no registry fixture configured; lookups will return empty histories");
            Ok(Arc::new(FixtureRegistry::default()))
        }
    }
}

/// Exporter with explicit buckets, so the count metrics render as histograms
/// rather than summaries.
pub(crate) fn metrics_builder() -> Result<PrometheusBuilder, AppError> {
    let buckets = [
        (AXUM_HTTP_REQUESTS_DURATION_SECONDS, &SECONDS_DURATION_BUCKETS[..]),
        (AGREEMENT_COUNT, COUNT_BUCKETS),
        (HISTORY_SIZE, COUNT_BUCKETS),
    ];

    buckets
        .into_iter()
        .try_fold(PrometheusBuilder::new(), |builder, (name, bounds)| {
            builder.set_buckets_for_metric(Matcher::Full(name.to_string()), bounds)
        })
        .map_err(|err| AppError::Metrics(err.to_string()))
}

pub(crate) fn build_probe(config: &ProbeConfig) -> QualityProbe {
    let probe = QualityProbe::new(Arc::new(PrometheusSink));
    match config.reference_date {
        Some(date) => probe.with_reference_date(date),
        None => probe,
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}
