//! Fixed demo computation pairs, selected by case number.
//!
//! Every case is built from the same few behaviours: return a value after a
//! number of ticks, never return until cancelled, or abort without a value.
//! Slow paths sleep in cancellable slices so a stop request ends them.

use std::time::Duration;

use tracing::debug;

use crate::cancel::{park_until_cancelled, sleep_cancellable, CancellationToken};
use crate::computation::{ComputationKind, Computations, ComputeError};
use crate::constants::{FIRST_DEMO_CASE, LAST_DEMO_CASE, OP_ZERO};

/// Default length of one demo tick.
pub const DEFAULT_TICK: Duration = Duration::from_millis(500);

/// A demo case number in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DemoCase(i32);

impl DemoCase {
    /// Accept `case` if it names one of the demo pairs.
    #[must_use]
    pub fn new(case: i32) -> Option<Self> {
        (FIRST_DEMO_CASE..=LAST_DEMO_CASE)
            .contains(&case)
            .then_some(Self(case))
    }

    /// The case number.
    #[must_use]
    pub fn number(self) -> i32 {
        self.0
    }

    /// All demo cases in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (FIRST_DEMO_CASE..=LAST_DEMO_CASE).map(Self)
    }
}

/// What one side of a demo case does.
#[derive(Debug, Clone, Copy)]
enum Behaviour {
    /// Return `op(x)` after the given number of ticks.
    After(u32, fn(i32) -> i32),
    /// Keep working until cancelled.
    Forever,
    /// Give up without a value after the given number of ticks.
    Abort(u32),
}

fn increment(x: i32) -> i32 {
    x.wrapping_add(1)
}

fn decrement(x: i32) -> i32 {
    x.wrapping_sub(1)
}

fn double(x: i32) -> i32 {
    x.wrapping_mul(2)
}

fn zero(_: i32) -> i32 {
    OP_ZERO
}

fn same(x: i32) -> i32 {
    x
}

/// The demo table: `(f, g)` per case.
fn behaviours(case: DemoCase) -> (Behaviour, Behaviour) {
    use Behaviour::{Abort, After, Forever};

    match case.0 {
        1 => (After(1, increment), After(2, double)),
        2 => (After(1, zero), Forever),
        3 => (Forever, After(1, zero)),
        4 => (After(1, increment), Forever),
        5 => (Forever, After(1, decrement)),
        _ => (Abort(1), After(2, same)),
    }
}

/// Demo computation pair for one [`DemoCase`].
pub struct DemoComputations {
    case: DemoCase,
    tick: Duration,
    name: String,
}

impl DemoComputations {
    /// Create the pair for `case` with the default tick.
    #[must_use]
    pub fn new(case: DemoCase) -> Self {
        Self::with_tick(case, DEFAULT_TICK)
    }

    /// Create the pair for `case` with a custom tick length.
    #[must_use]
    pub fn with_tick(case: DemoCase, tick: Duration) -> Self {
        Self {
            case,
            tick,
            name: format!("demo-{}", case.number()),
        }
    }

    /// The selected case.
    #[must_use]
    pub fn case(&self) -> DemoCase {
        self.case
    }

    fn run(
        &self,
        kind: ComputationKind,
        behaviour: Behaviour,
        x: i32,
        cancel: &CancellationToken,
    ) -> Result<i32, ComputeError> {
        match behaviour {
            Behaviour::After(ticks, op) => {
                sleep_cancellable(self.tick * ticks, cancel)?;
                Ok(op(x))
            }
            Behaviour::Forever => {
                debug!(case = self.case.number(), %kind, "computation runs until cancelled");
                Err(park_until_cancelled(cancel))
            }
            Behaviour::Abort(ticks) => {
                sleep_cancellable(self.tick * ticks, cancel)?;
                Err(ComputeError::Aborted(format!(
                    "demo case {} does not define {kind}",
                    self.case.number()
                )))
            }
        }
    }
}

impl Computations for DemoComputations {
    fn compute_f(&self, x: i32, cancel: &CancellationToken) -> Result<i32, ComputeError> {
        let (f, _) = behaviours(self.case);
        self.run(ComputationKind::F, f, x, cancel)
    }

    fn compute_g(&self, x: i32, cancel: &CancellationToken) -> Result<i32, ComputeError> {
        let (_, g) = behaviours(self.case);
        self.run(ComputationKind::G, g, x, cancel)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
