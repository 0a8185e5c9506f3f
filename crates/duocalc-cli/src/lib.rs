//! # duocalc-cli
//!
//! Standard-output presenter, operand input, and shell completion.

pub mod completion;
pub mod input;
pub mod presenter;

pub use input::{prompt_x, InputError};
pub use presenter::CLIResultPresenter;
