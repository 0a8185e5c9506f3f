//! CLI result presenter.

use std::io::{self, Write};

use parking_lot::Mutex;
use tracing::warn;

use duocalc_core::computation::ComputationKind;
use duocalc_orchestration::interfaces::{combination_line, computed_line, ResultPresenter};

/// Writes one line per event to a shared writer, flushing after each.
pub struct CLIResultPresenter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl CLIResultPresenter {
    /// Presenter writing to `out`.
    #[must_use]
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Presenter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!(error = %err, "failed to write result line");
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_computed(&self, kind: ComputationKind, value: Option<i32>) {
        self.write_line(&computed_line(kind, value));
    }

    fn present_combination(&self, value: Option<i32>) {
        self.write_line(&combination_line(value));
    }
}
