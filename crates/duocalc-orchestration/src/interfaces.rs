//! Orchestration interfaces.

use parking_lot::Mutex;

use duocalc_core::computation::ComputationKind;
use duocalc_core::constants::UNDEFINED;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// A computation's result has been drained from its channel.
    fn present_computed(&self, kind: ComputationKind, value: Option<i32>);

    /// The binary operation has been applied.
    fn present_combination(&self, value: Option<i32>);
}

/// Render an optional result, using the undefined marker for `None`.
#[must_use]
pub fn display_value(value: Option<i32>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string())
}

/// Line printed when a computation's result arrives.
#[must_use]
pub fn computed_line(kind: ComputationKind, value: Option<i32>) -> String {
    format!("{kind} has been computed. Result is {}", display_value(value))
}

/// Line printed for the combined result.
#[must_use]
pub fn combination_line(value: Option<i32>) -> String {
    format!("Binary operation result is {}", display_value(value))
}

/// Result of one side of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputationResult {
    pub kind: ComputationKind,
    /// Whether the channel was drained before the loop exited.
    pub computed: bool,
    /// The drained value; `None` when undefined or never drained.
    pub value: Option<i32>,
}

impl ComputationResult {
    #[must_use]
    pub fn pending(kind: ComputationKind) -> Self {
        Self {
            kind,
            computed: false,
            value: None,
        }
    }

    pub(crate) fn resolve(&mut self, value: Option<i32>) {
        self.computed = true;
        self.value = value;
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub f: ComputationResult,
    pub g: ComputationResult,
    /// Result of the binary operation.
    pub combined: Option<i32>,
    /// The loop exited on an absorbing result rather than waiting for both.
    pub short_circuited: bool,
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_computed(&self, _kind: ComputationKind, _value: Option<i32>) {}
    fn present_combination(&self, _value: Option<i32>) {}
}

/// Presenter that keeps the lines it would have printed.
#[derive(Default)]
pub struct RecordingPresenter {
    lines: Mutex<Vec<String>>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines recorded so far, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl ResultPresenter for RecordingPresenter {
    fn present_computed(&self, kind: ComputationKind, value: Option<i32>) {
        self.lines.lock().push(computed_line(kind, value));
    }

    fn present_combination(&self, value: Option<i32>) {
        self.lines.lock().push(combination_line(value));
    }
}
