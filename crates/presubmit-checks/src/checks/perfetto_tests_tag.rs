use presubmit_core::CheckResult;
use regex::RegexSet;
use tracing::debug;

use super::PresubmitCheck;
use crate::Result;
use crate::context::PresubmitContext;

/// Path prefixes of the trees whose changes must carry the tag.
const STDLIB_PATHS: [&str; 2] = [r"^base/tracing/stdlib/", r"^base/tracing/test/"];

const REQUIRED_TAG: &str = "PERFETTO_TESTS";

const REQUIRED_TAG_MESSAGE: &str =
    "Must provide PERFETTO_TESTS=`autoninja -C out/Default perfetto_diff_tests && \
     out/Default/bin/run_perfetto_diff_tests` line in CL description.\n\
     Please ensure the Perfetto diff tests pass before submitting.";

/// Requires changes to the chrome tracing stdlib or the Perfetto diff tests
/// to carry a `PERFETTO_TESTS` line in the change description.
///
/// The finding is a notification: it tells the author which commands to run,
/// it does not block submission.
pub struct PerfettoTestsTagCheck {
    patterns: RegexSet,
}

impl PerfettoTestsTagCheck {
    pub const NAME: &'static str = "perfetto-tests-tag";
    pub const DESCRIPTION: &'static str =
        "requires a PERFETTO_TESTS line when stdlib or diff test files change";

    /// # Errors
    ///
    /// Returns [`CheckError::Pattern`](crate::CheckError::Pattern) if the
    /// fixed path patterns fail to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: RegexSet::new(STDLIB_PATHS)?,
        })
    }
}

impl PresubmitCheck for PerfettoTestsTagCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn check(&self, context: &PresubmitContext) -> Result<Vec<CheckResult>> {
        let touched = context.files_matching(&self.patterns);
        if touched.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            files = touched.len(),
            "change touches the tracing stdlib or diff tests"
        );

        let tag_given = context
            .description()
            .tag(REQUIRED_TAG)
            .is_some_and(|value| !value.is_empty());
        if tag_given {
            return Ok(Vec::new());
        }

        Ok(vec![CheckResult::notify(REQUIRED_TAG_MESSAGE)])
    }
}
