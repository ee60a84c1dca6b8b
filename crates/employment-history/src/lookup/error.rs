use tracing::error;

use crate::registry::{FaultKind, RegistryFault};

/// Terminal outcome of a failed lookup; the caller gets this or the full list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The registry refused the request for this caller or input.
    #[error("registry rejected the request: {0}")]
    UpstreamRejected(RegistryFault),
    #[error("registry call failed: {0}")]
    UpstreamUnknown(RegistryFault),
}

impl LookupError {
    pub fn category(&self) -> &'static str {
        match self {
            LookupError::UpstreamRejected(_) => "upstream_rejected",
            LookupError::UpstreamUnknown(_) => "upstream_unknown",
        }
    }

    pub fn fault(&self) -> &RegistryFault {
        match self {
            LookupError::UpstreamRejected(fault) | LookupError::UpstreamUnknown(fault) => fault,
        }
    }
}

/// Translation table for employment registry faults.
pub fn employment_registry_error(fault: RegistryFault) -> LookupError {
    let error = match fault.kind {
        FaultKind::SecurityRestriction | FaultKind::InvalidInput => {
            LookupError::UpstreamRejected(fault)
        }
        FaultKind::FilterAccessDenied
        | FaultKind::NotFound
        | FaultKind::Transport
        | FaultKind::Unexpected => LookupError::UpstreamUnknown(fault),
    };
    log_failure("employment", &error);
    error
}

/// Translation table for income registry faults. Access to the freelance
/// income filter is a rejection here as well.
pub fn income_registry_error(fault: RegistryFault) -> LookupError {
    let error = match fault.kind {
        FaultKind::FilterAccessDenied
        | FaultKind::InvalidInput
        | FaultKind::SecurityRestriction => LookupError::UpstreamRejected(fault),
        FaultKind::NotFound | FaultKind::Transport | FaultKind::Unexpected => {
            LookupError::UpstreamUnknown(fault)
        }
    };
    log_failure("income", &error);
    error
}

fn log_failure(registry: &'static str, err: &LookupError) {
    let fault = err.fault();
    error!(
        registry,
        fault = %fault.kind,
        category = err.category(),
        message = %fault.message,
        "registry call failed"
    );
}
