//! # Completions Command Implementation
//!
//! This module implements the `completions` subcommand, which generates shell
//! completion scripts using `clap_complete`. The script is generated from the
//! rendered command tree, so descriptions show real product names.
//!
//! ## Example
//!
//! ```bash
//! chef completions bash > ~/.local/share/bash-completion/completions/chef
//! chef completions zsh > ~/.zfunc/_chef
//! ```

use anyhow::Result;
use clap::Args;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use chef_wrapper::dist;
use chef_wrapper::exit_codes;

use crate::cli;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` to `out`.
pub fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = cli::command();
    generate(shell, &mut cmd, dist::EXEC, out);
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<i32> {
    write_script(args.shell, &mut io::stdout());
    Ok(exit_codes::SUCCESS)
}
