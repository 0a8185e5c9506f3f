//! Run state shared between the orchestrator and the interrupt handler.
//!
//! The orchestrating thread is the only writer. The interrupt handler reads
//! the whole state with a single atomic load, so it never sees a phase from
//! one moment and completion flags from another.

use std::sync::atomic::{AtomicU8, Ordering};

use duocalc_core::computation::ComputationKind;

const SPAWNED: u8 = 1 << 0;
const F_COMPUTED: u8 = 1 << 1;
const G_COMPUTED: u8 = 1 << 2;
const FINISHED: u8 = 1 << 3;

fn computed_bit(kind: ComputationKind) -> u8 {
    match kind {
        ComputationKind::F => F_COMPUTED,
        ComputationKind::G => G_COMPUTED,
    }
}

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Workers have not been spawned; `x` may still be unknown.
    AwaitingInput,
    /// Workers are running and the poll loop is collecting results.
    Running,
    /// The poll loop has exited; only the combination remains.
    Finished,
}

/// A consistent view of [`RunState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    pub phase: Phase,
    pub f_computed: bool,
    pub g_computed: bool,
}

impl StateSnapshot {
    /// Whether the result of `kind` has been drained.
    #[must_use]
    pub fn is_computed(&self, kind: ComputationKind) -> bool {
        match kind {
            ComputationKind::F => self.f_computed,
            ComputationKind::G => self.g_computed,
        }
    }
}

/// Lifecycle phase plus the two completion flags, packed in one atomic.
#[derive(Debug, Default)]
pub struct RunState {
    bits: AtomicU8,
}

impl RunState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Workers are up; interrupts now report completion flags.
    pub fn mark_spawned(&self) {
        self.bits.fetch_or(SPAWNED, Ordering::AcqRel);
    }

    /// The result of `kind` has been drained from its channel.
    pub fn mark_computed(&self, kind: ComputationKind) {
        self.bits.fetch_or(computed_bit(kind), Ordering::AcqRel);
    }

    /// The poll loop has exited.
    pub fn mark_finished(&self) {
        self.bits.fetch_or(FINISHED, Ordering::AcqRel);
    }

    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        let bits = self.bits.load(Ordering::Acquire);
        let phase = if bits & FINISHED != 0 {
            Phase::Finished
        } else if bits & SPAWNED != 0 {
            Phase::Running
        } else {
            Phase::AwaitingInput
        };
        StateSnapshot {
            phase,
            f_computed: bits & F_COMPUTED != 0,
            g_computed: bits & G_COMPUTED != 0,
        }
    }
}
