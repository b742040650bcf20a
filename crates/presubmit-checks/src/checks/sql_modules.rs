use std::path::{Path, PathBuf};

use presubmit_core::CheckResult;
use tracing::debug;

use super::PresubmitCheck;
use crate::Result;
use crate::context::PresubmitContext;
use crate::traits::{CommandRunner, CommandSpec};

/// Validates the chrome tracing stdlib with the externally owned
/// `check_sql_modules.py` tool.
///
/// The tool does all the real work; this check only builds the invocation and
/// waits for it to finish. Its exit status is deliberately not reported yet.
pub struct SqlModulesCheck<'a> {
    python3: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> SqlModulesCheck<'a> {
    pub const NAME: &'static str = "sql-modules";
    pub const DESCRIPTION: &'static str =
        "runs check_sql_modules.py against the chrome tracing stdlib";

    #[must_use]
    pub fn new(python3: impl Into<PathBuf>, runner: &'a dyn CommandRunner) -> Self {
        Self {
            python3: python3.into(),
            runner,
        }
    }

    /// The checked directory sits two levels below the source root, e.g.
    /// `<root>/base/tracing`, and the tool ships with perfetto under
    /// `third_party`.
    fn tool_path(presubmit_path: &Path) -> PathBuf {
        presubmit_path
            .join("..")
            .join("..")
            .join("third_party")
            .join("perfetto")
            .join("tools")
            .join("check_sql_modules.py")
    }
}

impl PresubmitCheck for SqlModulesCheck<'_> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn check(&self, context: &PresubmitContext) -> Result<Vec<CheckResult>> {
        let tool = Self::tool_path(context.presubmit_path());

        // The stdlib sources argument is relative, so the tool runs from the
        // checked directory.
        let spec = CommandSpec {
            program: self.python3.clone(),
            args: vec![
                tool.into(),
                "--stdlib-sources".into(),
                "./stdlib/chrome".into(),
            ],
            current_dir: context.presubmit_path().to_path_buf(),
        };

        let status = self.runner.run(&spec)?;
        if !status.success() {
            // TODO(b/283962174): report a presubmit failure here once the
            // trace processor stdlib migration is complete. Until then a
            // failing tool run produces no finding.
            debug!(code = ?status.code, "check_sql_modules.py failed; exit status ignored");
            return Ok(Vec::new());
        }

        debug!("check_sql_modules.py passed");
        Ok(Vec::new())
    }
}
