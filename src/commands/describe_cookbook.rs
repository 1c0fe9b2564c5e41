//! # Describe Cookbook Command
//!
//! Placeholder for printing cookbook checksum information. It validates its
//! single argument and prints a fixed message; no external tool is run yet.

use anyhow::Result;
use clap::Args;
use log::debug;
use std::path::PathBuf;

use chef_wrapper::exit_codes;
use chef_wrapper::options::GlobalOptions;

pub const ABOUT: &str =
    "Prints cookbook checksum information for the cookbook at COOKBOOK_PATH";

/// Message printed until the command is wired to a real implementation.
pub const PLACEHOLDER: &str = "describe-cookbook called";

#[derive(Args, Debug)]
pub struct DescribeCookbookArgs {
    /// Path to the cookbook to describe
    #[arg(value_name = "COOKBOOK_PATH")]
    pub cookbook_path: PathBuf,
}

/// Execute the `describe-cookbook` command.
pub fn execute(args: DescribeCookbookArgs, options: &GlobalOptions) -> Result<i32> {
    debug!(
        "describe-cookbook for {} with {:?}",
        args.cookbook_path.display(),
        options
    );
    println!("{}", PLACEHOLDER);
    Ok(exit_codes::SUCCESS)
}
