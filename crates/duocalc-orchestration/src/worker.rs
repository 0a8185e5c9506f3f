//! Worker threads: run one computation and send its result.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use duocalc_core::cancel::CancellationToken;
use duocalc_core::computation::{ComputationKind, Computations, ComputeError};

use crate::channel::ResultSender;
use crate::error::OrchestrationError;

/// A running or finished worker.
#[derive(Debug)]
pub struct WorkerHandle {
    kind: ComputationKind,
    cancel: CancellationToken,
    thread: JoinHandle<()>,
}

impl WorkerHandle {
    /// Which computation this worker runs.
    #[must_use]
    pub fn kind(&self) -> ComputationKind {
        self.kind
    }

    /// Ask the worker to stop. Computations that poll their token return
    /// early; the result channel is left untouched.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Whether the worker thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the worker thread to exit.
    pub fn join(self) -> thread::Result<()> {
        self.thread.join()
    }
}

/// Start a worker computing `kind` of `computations` at `x`.
///
/// The sender moves into the worker thread. On success the value is sent;
/// otherwise the sender is dropped unsent and the receiver resolves to
/// undefined.
pub fn spawn_worker(
    computations: Arc<dyn Computations>,
    kind: ComputationKind,
    x: i32,
    sender: ResultSender,
) -> Result<WorkerHandle, OrchestrationError> {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let thread = thread::Builder::new()
        .name(format!("duocalc-{kind}"))
        .spawn(move || match computations.compute(kind, x, &token) {
            Ok(value) => {
                debug!(%kind, value, "computation finished");
                sender.send(value);
            }
            Err(ComputeError::Cancelled) => {
                debug!(%kind, "computation stopped");
            }
            Err(err) => {
                warn!(%kind, error = %err, "computation produced no value");
            }
        })
        .map_err(|source| OrchestrationError::Spawn { kind, source })?;

    Ok(WorkerHandle {
        kind,
        cancel,
        thread,
    })
}
