use std::path::{Path, PathBuf};

use presubmit_change::ChangeDescription;
use presubmit_core::AffectedFile;
use regex::RegexSet;

/// Everything a check may inspect about the change under review (input).
pub struct PresubmitContext {
    /// Directory the checks are anchored to, e.g. `<root>/base/tracing`.
    presubmit_path: PathBuf,
    /// Files touched by the change, paths relative to the repository root.
    affected_files: Vec<AffectedFile>,
    /// The change description, tag lines included.
    description: ChangeDescription,
}

impl PresubmitContext {
    #[must_use]
    pub fn new(
        presubmit_path: impl Into<PathBuf>,
        affected_files: Vec<AffectedFile>,
        description: ChangeDescription,
    ) -> Self {
        Self {
            presubmit_path: presubmit_path.into(),
            affected_files,
            description,
        }
    }

    #[must_use]
    pub fn presubmit_path(&self) -> &Path {
        &self.presubmit_path
    }

    #[must_use]
    pub fn affected_files(&self) -> &[AffectedFile] {
        &self.affected_files
    }

    #[must_use]
    pub fn description(&self) -> &ChangeDescription {
        &self.description
    }

    /// Affected files whose path matches any of the given patterns. Paths are
    /// matched in their git-native forward-slash form, whatever their status.
    #[must_use]
    pub fn files_matching(&self, patterns: &RegexSet) -> Vec<&AffectedFile> {
        self.affected_files
            .iter()
            .filter(|file| patterns.is_match(&file.path_str()))
            .collect()
    }
}
