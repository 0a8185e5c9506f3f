//! Cooperative cancellation for worker computations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::computation::ComputeError;

/// Longest uninterrupted sleep inside [`sleep_cancellable`].
const SLEEP_SLICE: Duration = Duration::from_millis(10);

/// Cooperative cancellation token using an atomic bool.
///
/// # Example
/// ```
/// use duocalc_core::cancel::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check for cancellation, returning an error if cancelled.
    pub fn check_cancelled(&self) -> Result<(), ComputeError> {
        if self.is_cancelled() {
            Err(ComputeError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleep for `duration`, waking up every few milliseconds to honour `token`.
///
/// Returns `Err(ComputeError::Cancelled)` as soon as cancellation is observed.
pub fn sleep_cancellable(duration: Duration, token: &CancellationToken) -> Result<(), ComputeError> {
    let deadline = Instant::now() + duration;
    loop {
        token.check_cancelled()?;
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(());
        }
        std::thread::sleep(remaining.min(SLEEP_SLICE));
    }
}

/// Block until `token` is cancelled. Always returns `ComputeError::Cancelled`.
pub fn park_until_cancelled(token: &CancellationToken) -> ComputeError {
    while !token.is_cancelled() {
        std::thread::sleep(SLEEP_SLICE);
    }
    ComputeError::Cancelled
}
