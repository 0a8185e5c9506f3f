//! Core orchestration: run `f` and `g` side by side and combine their results.

use std::sync::Arc;

use crossbeam_channel::Select;
use tracing::{debug, info};

use duocalc_core::combine::{binary_operation, is_absorbing};
use duocalc_core::computation::{ComputationKind, Computations};

use crate::channel::{result_channel, ResultReceiver, TryReceive};
use crate::error::OrchestrationError;
use crate::interfaces::{ComputationResult, ResultPresenter, RunOutcome};
use crate::state::RunState;
use crate::worker::spawn_worker;

/// What the poll loop collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    pub f: ComputationResult,
    pub g: ComputationResult,
    pub short_circuited: bool,
}

/// Runs one computation pair against one input.
pub struct Orchestrator<'a> {
    computations: Arc<dyn Computations>,
    state: Arc<RunState>,
    presenter: &'a dyn ResultPresenter,
}

impl<'a> Orchestrator<'a> {
    #[must_use]
    pub fn new(
        computations: Arc<dyn Computations>,
        state: Arc<RunState>,
        presenter: &'a dyn ResultPresenter,
    ) -> Self {
        Self {
            computations,
            state,
            presenter,
        }
    }

    /// Shared run state, as seen by the interrupt handler.
    #[must_use]
    pub fn state(&self) -> &Arc<RunState> {
        &self.state
    }

    /// Spawn both workers on `x`, collect their results, and combine them.
    pub fn run(&self, x: i32) -> Result<RunOutcome, OrchestrationError> {
        let (f_tx, f_rx) = result_channel();
        let (g_tx, g_rx) = result_channel();

        let f_worker = spawn_worker(Arc::clone(&self.computations), ComputationKind::F, x, f_tx)?;
        let g_worker =
            match spawn_worker(Arc::clone(&self.computations), ComputationKind::G, x, g_tx) {
                Ok(worker) => worker,
                Err(err) => {
                    f_worker.stop();
                    return Err(err);
                }
            };
        self.state.mark_spawned();
        info!(computations = self.computations.name(), x, "workers spawned");

        let polled = self.poll_results(&f_rx, &g_rx);
        self.state.mark_finished();

        f_worker.stop();
        g_worker.stop();

        let combined = binary_operation(polled.f.value, polled.g.value);
        self.presenter.present_combination(combined);
        debug!(?combined, short_circuited = polled.short_circuited, "run complete");

        Ok(RunOutcome {
            f: polled.f,
            g: polled.g,
            combined,
            short_circuited: polled.short_circuited,
        })
    }

    /// Drain both channels, `f` first on every pass, until both have resolved
    /// or one resolves to the absorbing value.
    ///
    /// Between passes the thread sleeps until one of the still-pending
    /// channels becomes ready.
    pub fn poll_results(&self, f_rx: &ResultReceiver, g_rx: &ResultReceiver) -> PollOutcome {
        let receivers = [f_rx, g_rx];
        let mut results = ComputationKind::ALL.map(ComputationResult::pending);

        let short_circuited = 'poll: loop {
            for (result, rx) in results.iter_mut().zip(receivers) {
                if result.computed {
                    continue;
                }
                if let TryReceive::Ready(value) = rx.try_receive() {
                    result.resolve(value);
                    self.state.mark_computed(result.kind);
                    self.presenter.present_computed(result.kind, value);
                    if is_absorbing(value) {
                        info!(kind = %result.kind, "absorbing result, not waiting for the other side");
                        break 'poll true;
                    }
                }
            }

            if results.iter().all(|r| r.computed) {
                break false;
            }

            wait_for_any(
                results
                    .iter()
                    .zip(receivers)
                    .filter(|(result, _)| !result.computed)
                    .map(|(_, rx)| rx),
            );
        };

        let [f, g] = results;
        PollOutcome {
            f,
            g,
            short_circuited,
        }
    }
}

/// Block until at least one of `pending` has a payload or is closed.
fn wait_for_any<'r>(pending: impl Iterator<Item = &'r ResultReceiver>) {
    let mut select = Select::new();
    for rx in pending {
        select.recv(rx.inner());
    }
    let _ = select.ready();
}
