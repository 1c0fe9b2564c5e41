//! # chef wrapper library
//!
//! The `chef` command is a dispatcher: each subcommand either prints a fixed
//! message or runs another executable as if the operator had invoked it
//! directly. This library holds the parts of that with real contracts.
//!
//! ## Quick Example
//!
//! ```no_run
//! use chef_wrapper::delegate::{delegate, DispatchRequest};
//!
//! # fn main() -> chef_wrapper::error::Result<()> {
//! let request = DispatchRequest::new("chef-cli", ["prod", "Policyfile.lock.json"])
//!     .with_leading_arg("push");
//! assert_eq!(request.argv(), ["push", "prod", "Policyfile.lock.json"]);
//!
//! // Streams are inherited; the child's exit code comes back unchanged.
//! let code = delegate(&request)?;
//! std::process::exit(code);
//! # }
//! ```
//!
//! ## Modules
//!
//! - **`delegate`**: builds and runs the child process and maps its exit
//!   status onto the dispatcher's exit code.
//! - **`dist`**: product names and the help text template renderer.
//! - **`options`**: global options parsed once and passed to every handler.
//! - **`error`**, **`exit_codes`**, **`suggestions`**: failure reporting.

pub mod delegate;
pub mod dist;
pub mod error;
pub mod exit_codes;
pub mod options;
pub mod suggestions;
