use presubmit_core::{CheckResult, PRESUBMIT_API_VERSION};
use serde::Serialize;
use tracing::debug;

use crate::Result;
use crate::checks::PresubmitCheck;
use crate::context::PresubmitContext;

/// The findings of one check, by name.
#[derive(Debug, Clone, Serialize)]
pub struct CheckRun {
    pub check: String,
    pub results: Vec<CheckResult>,
}

/// Everything a presubmit run produced for one change (output).
#[derive(Debug, Clone, Serialize)]
pub struct PresubmitReport {
    pub api_version: &'static str,
    pub runs: Vec<CheckRun>,
}

impl PresubmitReport {
    /// True when no check produced a finding.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.runs.iter().all(|run| run.results.is_empty())
    }

    /// True when any finding blocks submission.
    #[must_use]
    pub fn has_blocking(&self) -> bool {
        self.results().any(|result| result.level.is_blocking())
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.runs.iter().map(|run| run.results.len()).sum()
    }

    /// All findings across checks, in run order.
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.runs.iter().flat_map(|run| run.results.iter())
    }
}

/// Runs registered checks against a change, in registration order.
///
/// The checks are independent, so the order carries no semantic weight; it
/// only fixes the report layout.
pub struct PresubmitEngine<'a> {
    checks: Vec<&'a dyn PresubmitCheck>,
}

impl<'a> PresubmitEngine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn add_check(&mut self, check: &'a dyn PresubmitCheck) {
        self.checks.push(check);
    }

    /// Runs every registered check once, synchronously.
    ///
    /// # Errors
    ///
    /// The first check that fails to run aborts the whole run and its error
    /// propagates; findings never abort.
    pub fn run(&self, context: &PresubmitContext) -> Result<PresubmitReport> {
        let mut runs = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            debug!(check = check.name(), "running presubmit check");
            let results = check.check(context)?;
            runs.push(CheckRun {
                check: check.name().to_owned(),
                results,
            });
        }

        Ok(PresubmitReport {
            api_version: PRESUBMIT_API_VERSION,
            runs,
        })
    }
}

impl Default for PresubmitEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}
