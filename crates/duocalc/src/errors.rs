//! Error handling and exit codes.

use duocalc_core::constants::exit_codes;
use duocalc_orchestration::OrchestrationError;

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = if err.downcast_ref::<OrchestrationError>().is_some() {
        exit_codes::ERROR_TRANSPORT
    } else {
        exit_codes::ERROR_GENERIC
    };
    u8::try_from(code).unwrap_or(1)
}
