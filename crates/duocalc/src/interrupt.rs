//! Ctrl+C handling.
//!
//! One handler is installed for the whole process before `x` is read. It
//! reads the shared [`RunState`] when the interrupt arrives, so the switch
//! from "x has not been provided" to the completion report happens when the
//! orchestrator marks the workers as spawned.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use duocalc_core::constants::exit_codes;
use duocalc_orchestration::cancellation::cancellation_message;
use duocalc_orchestration::state::RunState;

/// Install the process-wide interrupt handler for `state`.
pub fn install(state: Arc<RunState>) -> Result<()> {
    ctrlc::set_handler(move || {
        let snapshot = state.snapshot();
        debug!(?snapshot, "interrupted");
        println!("\n{}", cancellation_message(snapshot));
        std::process::exit(exit_codes::ERROR_CANCELED);
    })
    .context("failed to install Ctrl+C handler")
}
