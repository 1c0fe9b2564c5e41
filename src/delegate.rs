//! # Process Delegate
//!
//! Runs an external executable as a transparent extension of the current
//! process. This is the only part of `chef` with a hard compatibility
//! contract: operators must get the same streams and the same exit code they
//! would get by running the wrapped tool directly.
//!
//! ## Contract
//!
//! - The target is resolved through `PATH` like any other command name.
//! - The child's argument vector is exactly `[leading_arg] + args`. Arguments
//!   are passed as a vector and never joined into a shell string, and are
//!   kept as `OsString` so bytes that are not valid UTF-8 reach the child
//!   unchanged.
//! - The child inherits the full environment and the parent's stdin, stdout
//!   and stderr. Nothing is captured or buffered.
//! - A child that exits with code N yields `Ok(N)`, including non-zero codes.
//! - A child that cannot be started, cannot be waited on, or ends without an
//!   exit code (killed by a signal) yields an [`Error`].
//! - Execution is never retried. The child is always reaped before
//!   [`delegate`] returns.

use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// One call to an external tool, built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    target: String,
    leading_arg: Option<OsString>,
    args: Vec<OsString>,
}

impl DispatchRequest {
    /// Create a request for `target` with the operator's trailing arguments.
    pub fn new<I, S>(target: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            target: target.into(),
            leading_arg: None,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Prepend a fixed argument, used when a `chef` verb maps to a different
    /// verb of the target tool.
    pub fn with_leading_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.leading_arg = Some(arg.into());
        self
    }

    /// Executable name, resolved through `PATH`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The fixed leading argument, if any.
    pub fn leading_arg(&self) -> Option<&OsStr> {
        self.leading_arg.as_deref()
    }

    /// Trailing arguments as received from the command line.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Full argument vector handed to the child.
    pub fn argv(&self) -> Vec<&OsStr> {
        self.leading_arg
            .iter()
            .chain(self.args.iter())
            .map(OsString::as_os_str)
            .collect()
    }

    /// The configured child process, ready to spawn.
    ///
    /// The environment is left untouched so the child inherits it.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.target);
        command
            .args(self.argv())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

/// Run `request` to completion and return the child's exit code.
pub fn delegate(request: &DispatchRequest) -> Result<i32> {
    debug!(
        "delegating to {} with arguments {:?}",
        request.target(),
        request.argv()
    );

    let mut child = request.command().spawn().map_err(|source| Error::Spawn {
        program: request.target().to_string(),
        source,
    })?;

    let status = child.wait().map_err(|source| Error::Wait {
        program: request.target().to_string(),
        source,
    })?;

    debug!("{} exited with {}", request.target(), status);
    exit_code(request.target(), status)
}

/// Map a child's termination status onto the exit code `chef` reports.
pub fn exit_code(program: &str, status: ExitStatus) -> Result<i32> {
    status.code().ok_or_else(|| Error::Signaled {
        program: program.to_string(),
        signal: signal(status),
    })
}

#[cfg(unix)]
fn signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal(_status: ExitStatus) -> Option<i32> {
    None
}
