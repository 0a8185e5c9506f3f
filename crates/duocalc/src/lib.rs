//! duocalc library: application logic for the duocalc binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod interrupt;
