mod file;
mod result;

pub use file::{AffectedFile, FileStatus};
pub use result::{CheckLevel, CheckResult};

/// Version of the presubmit API these checks are written against, carried
/// over from the review-tooling host they originated in.
pub const PRESUBMIT_API_VERSION: &str = "2.0.0";
