use std::process::Command;

use tracing::debug;

use crate::traits::{CommandRunner, CommandSpec, CommandStatus};
use crate::{CheckError, Result};

/// Runs commands through [`std::process::Command`].
///
/// Stdio is inherited, so whatever the tool prints reaches the user directly.
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        debug!(
            program = %spec.program.display(),
            cwd = %spec.current_dir.display(),
            "spawning command"
        );

        let status = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.current_dir)
            .status()
            .map_err(|source| CheckError::ToolLaunch {
                program: spec.program.clone(),
                source,
            })?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
