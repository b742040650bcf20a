use std::ffi::OsString;
use std::path::PathBuf;

use crate::Result;

/// One subprocess invocation: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub current_dir: PathBuf,
}

/// Exit status of a completed subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, or `None` when the process was ended by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    #[must_use]
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started. A process that
    /// starts and exits non-zero is not an error; its status is reported.
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus>;
}
