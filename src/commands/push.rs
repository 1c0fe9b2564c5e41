//! # Push Command Implementation
//!
//! `chef push` uploads a policy lock by handing every argument to
//! `chef-cli push`. The wrapped tool parses and validates the arguments and
//! reports its own errors; this command only forwards them.

use anyhow::Result;
use clap::Args;
use log::debug;
use std::ffi::OsString;

use chef_wrapper::delegate::DispatchRequest;
use chef_wrapper::dist;
use chef_wrapper::options::GlobalOptions;

use super::dispatch;

pub const ABOUT: &str = "Push a local policyfile lock to a policy group on the {server_product}";

pub const LONG_ABOUT: &str = "\
Upload an existing Policyfile.lock.json to a {server_product}, along
with all the cookbooks contained in the policy lock. The policy lock is applied
to a specific POLICY_GROUP, which is a set of nodes that share the same
run_list and cookbooks.

See the Policyfile documentation for more information:

https://docs.chef.io/policyfile/";

/// Verb understood by the wrapped tool.
const CLI_VERB: &str = "push";

#[derive(Args, Debug)]
pub struct PushArgs {
    /// POLICY_GROUP, then an optional POLICY_FILE and any options for {cli_exec}
    #[arg(
        value_name = "POLICY_GROUP",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl PushArgs {
    /// The delegated call for these arguments.
    pub fn request(self) -> DispatchRequest {
        DispatchRequest::new(dist::CLI_EXEC, self.args).with_leading_arg(CLI_VERB)
    }
}

/// Execute the `push` command.
pub fn execute(args: PushArgs, options: &GlobalOptions) -> Result<i32> {
    debug!("push with {:?}", options);
    dispatch(&args.request())
}
