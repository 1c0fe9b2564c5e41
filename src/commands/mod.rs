//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `chef`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - Help text templates (`ABOUT`, `LONG_ABOUT`) with `{placeholder}` names
//!   that the registry in `cli.rs` renders once.
//! - An `Args` struct that defines the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   [`GlobalOptions`](chef_wrapper::options::GlobalOptions) and returns the
//!   process exit code.
//!
//! Commands that are handled by another executable build a
//! [`DispatchRequest`] and hand it to [`dispatch`].

pub mod clean_policy_revisions;
pub mod completions;
pub mod describe_cookbook;
pub mod push;

use anyhow::Result;

use chef_wrapper::delegate::{delegate, DispatchRequest};
use chef_wrapper::suggestions;

/// Run a delegated command and return the child's exit code.
///
/// A child that exits non-zero has already reported its own failure, so its
/// code is returned as-is and nothing is printed here. Only dispatch
/// failures become errors.
pub fn dispatch(request: &DispatchRequest) -> Result<i32> {
    delegate(request).map_err(|error| suggestions::dispatch_failure(&error))
}
