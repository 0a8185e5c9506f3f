//! Application entry point and dispatch.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use duocalc_cli::presenter::CLIResultPresenter;
use duocalc_cli::prompt_x;
use duocalc_core::registry::create_computations;
use duocalc_orchestration::{Orchestrator, RunState};

use crate::config::AppConfig;
use crate::interrupt;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        duocalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let state = Arc::new(RunState::new());
    interrupt::install(Arc::clone(&state))?;

    let computations = create_computations(config.selector());

    let x = match config.x {
        Some(x) => x,
        None => prompt_x(&mut io::stdin().lock(), &mut io::stdout()).context("reading x")?,
    };
    info!(x, computations = computations.name(), "starting run");

    let presenter = CLIResultPresenter::stdout();
    let orchestrator = Orchestrator::new(computations, state, &presenter);
    orchestrator.run(x)?;

    Ok(())
}
