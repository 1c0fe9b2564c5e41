//! Shared test utilities for E2E tests.
//!
//! Delegated commands resolve `chef-cli` through `PATH`, so tests install a
//! stub `chef-cli` shell script in a temporary directory and put that
//! directory first on the child's `PATH`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let stub = StubTool::new(scripts::PRINT_ARGS);
//!     stub.command()
//!         .args(["push", "prod"])
//!         .assert()
//!         .stdout("<push>\n<prod>\n");
//! }
//! ```

#![cfg(unix)]

use assert_fs::prelude::*;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::scripts;
    pub use super::StubTool;
}

/// Bodies for stub `chef-cli` scripts.
#[allow(dead_code)]
pub mod scripts {
    /// Print every argument on its own line, wrapped in angle brackets.
    pub const PRINT_ARGS: &str = r#"for arg in "$@"; do printf '<%s>\n' "$arg"; done"#;

    /// Exit with the code given as the second argument (after the verb).
    pub const EXIT_WITH_ARG: &str = r#"exit "$2""#;

    /// Copy stdin to stdout.
    pub const ECHO_STDIN: &str = "cat";

    /// Echo stdin line by line with a prefix, prompting before each read.
    pub const PROMPT_ECHO: &str = r#"while printf 'input> ' && read -r line; do
  [ "$line" = "quit" ] && exit 0
  printf 'got: %s\n' "$line"
done"#;

    /// Print the value of CHEF_WRAPPER_VALUE.
    pub const PRINT_ENV_VAR: &str = r#"printf '%s\n' "$CHEF_WRAPPER_VALUE""#;

    /// Write to stderr and fail.
    pub const FAIL_LOUDLY: &str = r#"echo "chef-cli: policy group not found" >&2; exit 3"#;

    /// Kill itself with SIGKILL.
    pub const KILL_SELF: &str = "kill -9 $$";

    /// Record that it ran by creating the file named by CHEF_WRAPPER_MARKER.
    pub const TOUCH_MARKER: &str = r#"touch "$CHEF_WRAPPER_MARKER""#;
}

/// A temporary directory holding an executable stub named `chef-cli`.
pub struct StubTool {
    temp_dir: assert_fs::TempDir,
}

impl StubTool {
    /// Install a stub whose body is `script`.
    pub fn new(script: &str) -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let stub = temp_dir.child("chef-cli");
        stub.write_str(&format!("#!/bin/sh\n{script}\n"))
            .expect("Failed to write stub");
        fs::set_permissions(stub.path(), fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub executable");
        Self { temp_dir }
    }

    /// A directory on `PATH` with no `chef-cli` in it.
    #[allow(dead_code)]
    pub fn missing() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Directory containing the stub.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file inside the stub directory, used as a run marker.
    #[allow(dead_code)]
    pub fn marker(&self) -> PathBuf {
        self.temp_dir.path().join("ran")
    }

    /// `PATH` value with the stub directory first.
    pub fn search_path(&self) -> OsString {
        let mut dirs = vec![self.dir().to_path_buf()];
        if let Some(existing) = env::var_os("PATH") {
            dirs.extend(env::split_paths(&existing));
        }
        env::join_paths(dirs).expect("Failed to build PATH")
    }

    /// `PATH` value containing only the stub directory.
    #[allow(dead_code)]
    pub fn isolated_search_path(&self) -> OsString {
        self.dir().as_os_str().to_os_string()
    }

    /// A `chef` command that will find this stub as `chef-cli`.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("chef");
        cmd.env("PATH", self.search_path())
            .env("CHEF_WRAPPER_MARKER", self.marker())
            .env_remove("RUST_LOG");
        cmd
    }
}
