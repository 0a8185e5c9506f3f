//! What to tell the user when a run is interrupted.
//!
//! Before the workers are spawned the only thing missing is `x`. Afterwards
//! the message names which results had been drained. A drained result that
//! was zero ends the poll loop, so "computed" on only one side implies that
//! side is not zero (it may be undefined).

use crate::state::{Phase, StateSnapshot};

pub const MSG_NO_INPUT: &str = "Aborted by user, x has not been provided";
pub const MSG_NONE_COMPUTED: &str = "Aborted by user. f and g have not been computed";
pub const MSG_ONLY_G_COMPUTED: &str = "Aborted by user. f has not been computed, g is not 0";
pub const MSG_ONLY_F_COMPUTED: &str = "Aborted by user. g has not been computed, f is not 0";
pub const MSG_ABORTED: &str = "Aborted by user";

/// Pick the interrupt message for `snapshot`.
#[must_use]
pub fn cancellation_message(snapshot: StateSnapshot) -> &'static str {
    match snapshot.phase {
        Phase::AwaitingInput => MSG_NO_INPUT,
        Phase::Finished => MSG_ABORTED,
        Phase::Running => match (snapshot.f_computed, snapshot.g_computed) {
            (false, false) => MSG_NONE_COMPUTED,
            (false, true) => MSG_ONLY_G_COMPUTED,
            (true, false) => MSG_ONLY_F_COMPUTED,
            (true, true) => MSG_ABORTED,
        },
    }
}
