//! # Error Handling
//!
//! This module defines the error type for the `chef` dispatcher library. It
//! uses `thiserror` to describe the ways a dispatch can fail before the
//! wrapped tool gets a chance to report anything itself.
//!
//! ## Key Components
//!
//! - **`Error`**: every failure the library can report. All variants are
//!   dispatch failures: the external tool could not be started, could not be
//!   waited on, or ended without an exit code.
//!
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.
//!
//! A child process that runs and exits non-zero is *not* an error here. Its
//! exit code is returned as a successful result so the binary can hand it
//! back to the operator unchanged.

use std::io;

use thiserror::Error;

/// Main error type for dispatch operations
#[derive(Error, Debug)]
pub enum Error {
    /// The external executable could not be located or started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The external process started but waiting for it failed.
    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The external process ended without an exit code.
    ///
    /// On Unix this happens when the child is killed by a signal. The signal
    /// number is recorded when the platform exposes it.
    #[error("{program} terminated without an exit code{}", signal.map(|s| format!(" (signal {})", s)).unwrap_or_default())]
    Signaled {
        program: String,
        /// Terminating signal, if known
        signal: Option<i32>,
    },
}

impl Error {
    /// Name of the external program this error refers to.
    pub fn program(&self) -> &str {
        match self {
            Error::Spawn { program, .. }
            | Error::Wait { program, .. }
            | Error::Signaled { program, .. } => program,
        }
    }

    /// True when the program could not be found on the search path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
