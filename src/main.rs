//! # chef
//!
//! This is the binary entry point for the `chef` command-line tool.
//!
//! Its primary responsibilities are:
//! - Resolving command-line arguments against the command registry.
//! - Executing the matched subcommand.
//! - Translating the outcome into the process exit code: the wrapped tool's
//!   own code for delegated commands, `1` for any failure of the dispatcher.
//!
//! Delegation itself lives in the `chef_wrapper` library so the binary stays a
//! thin wrapper around it.

mod cli;
mod commands;

use std::env;
use std::process;

use chef_wrapper::exit_codes;

fn main() {
    let code = match cli::Cli::resolve(env::args_os()) {
        Ok(cli) => match cli.execute() {
            Ok(code) => code,
            Err(error) => {
                eprintln!("Error: {:?}", error);
                exit_codes::FAILURE
            }
        },
        // Help and version requests render through the error path with
        // use_stderr() == false.
        Err(error) => {
            let _ = error.print();
            if error.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::SUCCESS
            }
        }
    };
    process::exit(code);
}
