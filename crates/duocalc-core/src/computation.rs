//! The computation pair trait and the user-supplied implementation.
//!
//! `Computations` is the trait consumed by the workers. `CustomComputations`
//! wraps two plain closures; the fixed demo table lives in [`crate::demo`].

use std::fmt;

use crate::cancel::CancellationToken;

/// Error type for a single computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComputeError {
    /// The worker was asked to stop before the computation finished.
    #[error("computation cancelled")]
    Cancelled,

    /// The computation gave up without producing a value.
    #[error("computation aborted: {0}")]
    Aborted(String),
}

/// Which of the two computations a worker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputationKind {
    F,
    G,
}

impl ComputationKind {
    /// Both kinds, in the order the orchestrator checks them.
    pub const ALL: [Self; 2] = [Self::F, Self::G];

    /// The name printed for this computation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::F => "f",
            Self::G => "g",
        }
    }

    /// The other computation of the pair.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::F => Self::G,
            Self::G => Self::F,
        }
    }
}

impl fmt::Display for ComputationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pair of integer computations run side by side.
///
/// Implementations that do slow work should poll `cancel` and return
/// `ComputeError::Cancelled` once it is set.
pub trait Computations: Send + Sync {
    /// Compute `f(x)`.
    fn compute_f(&self, x: i32, cancel: &CancellationToken) -> Result<i32, ComputeError>;

    /// Compute `g(x)`.
    fn compute_g(&self, x: i32, cancel: &CancellationToken) -> Result<i32, ComputeError>;

    /// Short description used in logs.
    fn name(&self) -> &str;

    /// Dispatch to `compute_f` or `compute_g`.
    fn compute(
        &self,
        kind: ComputationKind,
        x: i32,
        cancel: &CancellationToken,
    ) -> Result<i32, ComputeError> {
        match kind {
            ComputationKind::F => self.compute_f(x, cancel),
            ComputationKind::G => self.compute_g(x, cancel),
        }
    }
}

type Transform = Box<dyn Fn(i32) -> i32 + Send + Sync>;

/// A user-supplied pair of pure transforms.
pub struct CustomComputations {
    f: Transform,
    g: Transform,
}

impl CustomComputations {
    /// Create a pair from two closures.
    pub fn new<F, G>(f: F, g: G) -> Self
    where
        F: Fn(i32) -> i32 + Send + Sync + 'static,
        G: Fn(i32) -> i32 + Send + Sync + 'static,
    {
        Self {
            f: Box::new(f),
            g: Box::new(g),
        }
    }

    /// The identity pair `(x -> x, x -> x)`.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|x| x, |x| x)
    }
}

impl Computations for CustomComputations {
    fn compute_f(&self, x: i32, _cancel: &CancellationToken) -> Result<i32, ComputeError> {
        Ok((self.f)(x))
    }

    fn compute_g(&self, x: i32, _cancel: &CancellationToken) -> Result<i32, ComputeError> {
        Ok((self.g)(x))
    }

    fn name(&self) -> &str {
        "custom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_input() {
        let pair = CustomComputations::identity();
        let cancel = CancellationToken::new();
        for x in [-7, 0, 3, i32::MAX] {
            assert_eq!(pair.compute_f(x, &cancel), Ok(x));
            assert_eq!(pair.compute_g(x, &cancel), Ok(x));
        }
    }

    #[test]
    fn custom_pair_applies_each_transform() {
        let pair = CustomComputations::new(|x| x + 1, |x| x * 10);
        let cancel = CancellationToken::new();
        assert_eq!(pair.compute(ComputationKind::F, 4, &cancel), Ok(5));
        assert_eq!(pair.compute(ComputationKind::G, 4, &cancel), Ok(40));
    }

    #[test]
    fn kind_names_and_order() {
        assert_eq!(ComputationKind::ALL, [ComputationKind::F, ComputationKind::G]);
        assert_eq!(ComputationKind::F.name(), "f");
        assert_eq!(ComputationKind::G.to_string(), "g");
        assert_eq!(ComputationKind::F.other(), ComputationKind::G);
    }

    #[test]
    fn compute_error_display() {
        assert_eq!(ComputeError::Cancelled.to_string(), "computation cancelled");
        assert_eq!(
            ComputeError::Aborted("boom".into()).to_string(),
            "computation aborted: boom"
        );
    }
}
