//! Orchestration errors.

use duocalc_core::computation::ComputationKind;

/// Failures that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    /// A worker thread could not be started.
    #[error("failed to spawn worker for {kind}: {source}")]
    Spawn {
        kind: ComputationKind,
        #[source]
        source: std::io::Error,
    },
}
