mod perfetto_tests_tag;
mod sql_modules;

pub use perfetto_tests_tag::PerfettoTestsTagCheck;
pub use sql_modules::SqlModulesCheck;

use presubmit_core::CheckResult;

use crate::Result;
use crate::context::PresubmitContext;

/// A single presubmit check.
///
/// Checks are stateless single-pass evaluations: `check` inspects the context
/// and returns its findings, an empty list meaning the check passed.
pub trait PresubmitCheck {
    /// Stable name used for check selection and reporting.
    fn name(&self) -> &'static str;

    /// One-line description shown in the check listing.
    fn description(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns an error only when the check itself cannot run, e.g. the
    /// external tool cannot be launched. Findings are results, never errors.
    fn check(&self, context: &PresubmitContext) -> Result<Vec<CheckResult>>;
}
