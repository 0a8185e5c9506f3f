//! Constants shared by the computations, the result channel, and the binary.

/// Absorbing element of the binary operation.
pub const OP_ZERO: i32 = 0;

/// Marker printed in place of a result that was never produced.
pub const UNDEFINED: &str = "undefined";

/// Width in bytes of an encoded result on the wire.
pub const INT_SIZE: usize = 4;

/// Lowest demo case selector.
pub const FIRST_DEMO_CASE: i32 = 1;

/// Highest demo case selector.
pub const LAST_DEMO_CASE: i32 = 6;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (bad input, stdin failure).
    pub const ERROR_GENERIC: i32 = 1;
    /// Workers or their channels could not be set up.
    pub const ERROR_TRANSPORT: i32 = 2;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
