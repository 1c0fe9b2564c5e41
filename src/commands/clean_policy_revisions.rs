//! # Clean Policy Revisions Command
//!
//! Placeholder that prints a fixed message and exits successfully.

use anyhow::Result;
use clap::Args;
use log::debug;

use chef_wrapper::exit_codes;
use chef_wrapper::options::GlobalOptions;

pub const ABOUT: &str = "Delete unused policy revisions on the {server_product}";

pub const LONG_ABOUT: &str = "\
Delete policy revisions on the {server_product} that are not the active
revision in any policy group. Revisions still referenced by a policy group
are kept.";

pub const PLACEHOLDER: &str = "clean-policy-revisions called";

#[derive(Args, Debug)]
pub struct CleanPolicyRevisionsArgs {}

/// Execute the `clean-policy-revisions` command.
pub fn execute(_args: CleanPolicyRevisionsArgs, options: &GlobalOptions) -> Result<i32> {
    debug!("clean-policy-revisions with {:?}", options);
    println!("{}", PLACEHOLDER);
    Ok(exit_codes::SUCCESS)
}
