//! # Error Suggestions
//!
//! Helpers that turn dispatch failures into messages telling the operator
//! what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chef_wrapper::suggestions;
//!
//! if let Err(error) = delegate(&request) {
//!     eprintln!("Error: {}", suggestions::dispatch_failure(&error));
//! }
//! ```

use std::io;

use crate::dist;
use crate::error::Error;

/// Generate an error for an executable that is not on `PATH`.
pub fn executable_not_found(program: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "{program} was not found on your PATH\n\n\
         hint: {program} ships with {product}; make sure it is installed\n\
         hint: Check that the {product} bin directory is listed in PATH",
        product = dist::WORKSTATION_PRODUCT
    )
}

/// Generate an error for an executable that exists but may not be run.
pub fn executable_not_permitted(program: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Permission denied running {program}\n\n\
         hint: Check that {program} is executable by the current user"
    )
}

/// Render any dispatch failure with the hints that apply to it.
pub fn dispatch_failure(error: &Error) -> anyhow::Error {
    match error {
        Error::Spawn { program, source } => match source.kind() {
            io::ErrorKind::NotFound => executable_not_found(program),
            io::ErrorKind::PermissionDenied => executable_not_permitted(program),
            _ => anyhow::anyhow!("{error}"),
        },
        Error::Signaled { program, .. } => anyhow::anyhow!(
            "{error}\n\n\
             hint: {program} was stopped before it could report a result; \
             re-run it to see its own output"
        ),
        Error::Wait { .. } => anyhow::anyhow!("{error}"),
    }
}
