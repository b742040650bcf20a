use std::sync::Mutex;

use presubmit_change::ChangeDescription;
use presubmit_core::{AffectedFile, FileStatus};

use crate::context::PresubmitContext;
use crate::traits::{CommandRunner, CommandSpec, CommandStatus};
use crate::{CheckError, Result};

/// Records every invocation and reports a configurable exit code.
pub struct MockCommandRunner {
    exit_code: Option<i32>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl MockCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            exit_code: Some(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `None` mimics a process ended by a signal.
    #[must_use]
    pub fn with_exit_code(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        self.calls.lock().expect("lock poisoned").push(spec.clone());
        Ok(CommandStatus {
            code: self.exit_code,
        })
    }
}

/// Always fails to launch, as if the program did not exist.
pub struct FailingCommandRunner;

impl CommandRunner for FailingCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        Err(CheckError::ToolLaunch {
            program: spec.program.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock launch failure"),
        })
    }
}

/// A context rooted at `/repo/base/tracing` with every file marked modified.
#[must_use]
pub fn make_context(paths: &[&str], description: &str) -> PresubmitContext {
    let files = paths
        .iter()
        .map(|path| AffectedFile::new(*path, FileStatus::Modified))
        .collect();
    PresubmitContext::new(
        "/repo/base/tracing",
        files,
        ChangeDescription::new(description),
    )
}
