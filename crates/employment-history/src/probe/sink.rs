use metrics::{counter, describe_counter, describe_histogram, histogram};

use super::observation::Observation;

pub const OBSERVATIONS_TOTAL: &str = "employment_quality_observations_total";
pub const FREELANCE_RECORDS_TOTAL: &str = "employment_freelance_records_total";
pub const AGREEMENT_COUNT: &str = "employment_agreement_count";
pub const HISTORY_SIZE: &str = "employment_history_size";

/// Bucket bounds for the agreement-count and history-size histograms.
pub const COUNT_BUCKETS: &[f64] = &[
    0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 15.0, 20.0, 40.0, 60.0, 80.0, 100.0,
];

/// Destination for probe metrics so the probe can be exercised without a recorder.
pub trait MetricsSink: Send + Sync {
    fn observation(&self, observation: &Observation);
    fn freelance_records(&self, count: u64);
    fn agreement_count(&self, count: usize);
    fn history_size(&self, count: usize);
}

/// Forwards to whatever `metrics` recorder is installed. Without one every
/// call is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusSink;

impl PrometheusSink {
    /// Registers help text; call once after installing the recorder.
    pub fn describe() {
        describe_counter!(
            OBSERVATIONS_TOTAL,
            "Data-quality observations by kind and subject"
        );
        describe_counter!(
            FREELANCE_RECORDS_TOTAL,
            "Freelance records returned by the income registry"
        );
        describe_histogram!(
            AGREEMENT_COUNT,
            "Agreements per employee record after enrichment"
        );
        describe_histogram!(HISTORY_SIZE, "Records per aggregated employment history");
    }
}

impl MetricsSink for PrometheusSink {
    fn observation(&self, observation: &Observation) {
        counter!(
            OBSERVATIONS_TOTAL,
            "kind" => observation.kind.label(),
            "subject" => observation.subject
        )
        .increment(1);
    }

    fn freelance_records(&self, count: u64) {
        counter!(FREELANCE_RECORDS_TOTAL).increment(count);
    }

    fn agreement_count(&self, count: usize) {
        histogram!(AGREEMENT_COUNT).record(count as f64);
    }

    fn history_size(&self, count: usize) {
        histogram!(HISTORY_SIZE).record(count as f64);
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingSink;
