//! # duocalc-orchestration
//!
//! Worker spawning, one-shot result channels, the poll loop that collects
//! and combines results, and interrupt reporting.

pub mod cancellation;
pub mod channel;
pub mod error;
pub mod interfaces;
pub mod orchestrator;
pub mod state;
pub mod worker;

pub use cancellation::cancellation_message;
pub use channel::{result_channel, ResultReceiver, ResultSender, TryReceive};
pub use error::OrchestrationError;
pub use interfaces::{ResultPresenter, RunOutcome};
pub use orchestrator::Orchestrator;
pub use state::RunState;
