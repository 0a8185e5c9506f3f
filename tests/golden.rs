//! Golden file integration tests.
//!
//! Reads tests/testdata/demo_golden.json and checks that every terminating
//! run prints the expected completion and combination lines.

use std::sync::Arc;
use std::time::Duration;

use duocalc_core::computation::{Computations, CustomComputations};
use duocalc_core::demo::{DemoCase, DemoComputations};
use duocalc_orchestration::interfaces::RecordingPresenter;
use duocalc_orchestration::{Orchestrator, RunState};
use duocalc_tests::{load_golden, GoldenRun};

const TICK: Duration = Duration::from_millis(20);

fn computations_for(selector: Option<i32>) -> Arc<dyn Computations> {
    match selector.and_then(DemoCase::new) {
        Some(case) => Arc::new(DemoComputations::with_tick(case, TICK)),
        None => Arc::new(CustomComputations::identity()),
    }
}

fn check(run: &GoldenRun) {
    let presenter = RecordingPresenter::new();
    let orchestrator = Orchestrator::new(
        computations_for(run.selector),
        Arc::new(RunState::new()),
        &presenter,
    );
    let outcome = orchestrator.run(run.x).expect("run failed");
    let lines = presenter.lines();
    let label = format!("selector={:?} x={}", run.selector, run.x);

    let (combination, computed) = lines.split_last().expect("no output");
    assert_eq!(combination, &run.combination, "{label}");
    assert_eq!(computed.len(), run.computed.len(), "{label}: {computed:?}");
    for expected in &run.computed {
        assert!(computed.contains(expected), "{label}: missing {expected:?} in {computed:?}");
    }
    assert_eq!(outcome.short_circuited, run.short_circuited, "{label}");
}

#[test]
fn golden_runs() {
    let data = load_golden();
    assert!(!data.description.is_empty());
    for run in &data.runs {
        check(run);
    }
}

#[test]
fn golden_covers_every_terminating_case() {
    let data = load_golden();
    for case in [1, 2, 3, 6] {
        assert!(
            data.runs.iter().any(|r| r.selector == Some(case)),
            "demo case {case} missing from golden data"
        );
    }
    assert!(data.runs.iter().any(|r| r.selector.is_none()));
}
