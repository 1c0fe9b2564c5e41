//! # Exit Codes
//!
//! Process exit codes used by the `chef` binary.
//!
//! - `0`: success
//! - the wrapped tool's own code when a delegated command exits non-zero
//! - `1`: any failure inside the dispatcher itself, usage errors included
//!
//! Scripts and CI pipelines compare these codes against what the wrapped
//! tool returns when run directly, so a delegated code is never rewritten.
//! A child killed by a signal has no portable exit code and reports
//! [`FAILURE`].

/// The command completed successfully.
pub const SUCCESS: i32 = 0;

/// Unknown command, bad argument count, executable not found, child killed
/// by a signal, or any other failure that has no more specific code.
pub const FAILURE: i32 = 1;
