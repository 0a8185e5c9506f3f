//! # duocalc-core
//!
//! Core library for duocalc: the pair of computations `f` and `g`, the
//! cooperative cancellation token workers run under, and the short-circuiting
//! binary operation that combines their results.

pub mod cancel;
pub mod combine;
pub mod computation;
pub mod constants;
pub mod demo;
pub mod registry;

// Re-exports
pub use cancel::CancellationToken;
pub use combine::{binary_operation, is_absorbing};
pub use computation::{ComputationKind, Computations, ComputeError, CustomComputations};
pub use constants::{exit_codes, INT_SIZE, OP_ZERO, UNDEFINED};
pub use demo::{DemoCase, DemoComputations};
pub use registry::{create_computations, parse_selector};
