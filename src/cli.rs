//! CLI argument parsing and command dispatch

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Command, CommandFactory, FromArgMatches, Parser, Subcommand};

use chef_wrapper::dist;
use chef_wrapper::exit_codes;
use chef_wrapper::options::{GlobalOptions, LicenseAcceptance};

use crate::commands;

// Help strings below are templates; `command()` renders them once.

/// {workstation_product} command line
#[derive(Parser, Debug)]
#[command(name = "chef", disable_version_flag = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read configuration from CONFIG_FILE_PATH
    #[arg(short, long, global = true, value_name = "CONFIG_FILE_PATH")]
    config: Option<PathBuf>,

    /// Accept product license, where ACCEPTANCE is one of 'accept', 'accept-no-persist', or 'accept-silent'
    #[arg(
        long = "chef-license",
        global = true,
        value_name = "ACCEPTANCE",
        value_enum,
        hide_possible_values = true
    )]
    chef_license: Option<LicenseAcceptance>,

    /// Enable debug output when available
    #[arg(short, long, global = true)]
    debug: bool,

    /// Show {workstation_product} version information
    #[arg(short = 'v', long)]
    version: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = commands::push::ABOUT,
        long_about = commands::push::LONG_ABOUT,
        override_usage = "chef push POLICY_GROUP [POLICY_FILE]"
    )]
    Push(commands::push::PushArgs),

    #[command(
        about = commands::describe_cookbook::ABOUT,
        override_usage = "chef describe-cookbook COOKBOOK_PATH"
    )]
    DescribeCookbook(commands::describe_cookbook::DescribeCookbookArgs),

    #[command(
        about = commands::clean_policy_revisions::ABOUT,
        long_about = commands::clean_policy_revisions::LONG_ABOUT
    )]
    CleanPolicyRevisions(commands::clean_policy_revisions::CleanPolicyRevisionsArgs),

    /// Generate shell completion scripts for {exec}
    Completions(commands::completions::CompletionsArgs),
}

/// Build the root command with every help template rendered.
pub fn command() -> Command {
    render_help(Cli::command())
}

fn render_help(mut cmd: Command) -> Command {
    if let Some(about) = cmd.get_about().map(|s| dist::render(&s.to_string())) {
        cmd = cmd.about(about);
    }
    if let Some(long_about) = cmd.get_long_about().map(|s| dist::render(&s.to_string())) {
        cmd = cmd.long_about(long_about);
    }

    let arg_ids: Vec<String> = cmd
        .get_arguments()
        .map(|arg| arg.get_id().to_string())
        .collect();
    for id in arg_ids {
        cmd = cmd.mut_arg(id, |mut arg| {
            if let Some(help) = arg.get_help().map(|s| dist::render(&s.to_string())) {
                arg = arg.help(help);
            }
            if let Some(long_help) = arg.get_long_help().map(|s| dist::render(&s.to_string())) {
                arg = arg.long_help(long_help);
            }
            arg
        });
    }

    let names: Vec<String> = cmd
        .get_subcommands()
        .map(|sub| sub.get_name().to_string())
        .collect();
    for name in names {
        cmd = cmd.mut_subcommand(name, render_help);
    }
    cmd
}

impl Cli {
    /// Resolve an argument vector against the rendered command tree.
    pub fn resolve<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = command();
        let matches = cmd.try_get_matches_from_mut(args)?;
        Self::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))
    }

    /// Options shared by every subcommand.
    pub fn options(&self) -> GlobalOptions {
        GlobalOptions {
            config_file: self.config.clone(),
            license: self.chef_license,
            debug: self.debug,
        }
    }

    /// Execute the CLI command and return the process exit code.
    pub fn execute(self) -> Result<i32> {
        let options = self.options();
        init_logging(&options);

        if self.version {
            println!("{}", dist::version_line());
            return Ok(exit_codes::SUCCESS);
        }

        match self.command {
            Some(Commands::Push(args)) => commands::push::execute(args, &options),
            Some(Commands::DescribeCookbook(args)) => {
                commands::describe_cookbook::execute(args, &options)
            }
            Some(Commands::CleanPolicyRevisions(args)) => {
                commands::clean_policy_revisions::execute(args, &options)
            }
            Some(Commands::Completions(args)) => commands::completions::execute(args),
            None => {
                command().print_help()?;
                Ok(exit_codes::SUCCESS)
            }
        }
    }
}

/// Route `log` output to stderr.
///
/// `--debug` raises the default filter; `RUST_LOG` overrides it.
fn init_logging(options: &GlobalOptions) {
    let env = env_logger::Env::default().default_filter_or(options.log_filter());
    // A logger may already be installed when running under the test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
