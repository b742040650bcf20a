use std::borrow::Cow;
use std::path::PathBuf;

/// How a file was changed relative to the diff base.
///
/// Rename detection is not performed when enumerating a change, so these
/// three statuses are exhaustive: a moved file shows up as a `Deleted` entry
/// for its old path and an `Added` entry for its new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
}

/// A file touched by the change under review.
///
/// Paths are repository-root-relative and forward-slash delimited, the form
/// git reports them in and the form path-pattern tables match against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffectedFile {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl AffectedFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }

    /// The path as a string for pattern matching.
    #[must_use]
    pub fn path_str(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }
}
