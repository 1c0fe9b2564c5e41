//! Global options shared by every subcommand.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// How the operator accepts the product license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LicenseAcceptance {
    /// Accept the license and persist the acceptance
    Accept,
    /// Accept the license without persisting the acceptance
    AcceptNoPersist,
    /// Accept the license and persist it without printing a notice
    AcceptSilent,
}

impl LicenseAcceptance {
    /// The flag value as typed on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            LicenseAcceptance::Accept => "accept",
            LicenseAcceptance::AcceptNoPersist => "accept-no-persist",
            LicenseAcceptance::AcceptSilent => "accept-silent",
        }
    }
}

impl fmt::Display for LicenseAcceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options parsed once from the root command's global flags.
///
/// Handlers receive this by reference; nothing writes to it after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// `--config`: configuration file location
    pub config_file: Option<PathBuf>,
    /// `--chef-license`: license acceptance mode
    pub license: Option<LicenseAcceptance>,
    /// `--debug`: verbose diagnostics
    pub debug: bool,
}

impl GlobalOptions {
    /// Log filter implied by these options.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}
