use std::path::PathBuf;

use presubmit_core::{AffectedFile, FileStatus};

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Lists the files that differ between two committed trees.
    ///
    /// A `base` of `None` compares against the empty tree, so every file in
    /// `head` is reported as added. Renames are deliberately not folded: a
    /// moved file shows up as one deleted and one added entry, which is what
    /// path-gated checks need to see.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either base or head cannot be resolved.
    pub fn changed_files(&self, base: Option<&str>, head: &str) -> Result<Vec<AffectedFile>> {
        let head_tree = self.resolve_tree(head)?;

        let base_tree = match base {
            Some(refspec) => Some(self.resolve_tree(refspec)?),
            None => None,
        };

        let diff = self
            .inner
            .diff_tree_to_tree(base_tree.as_ref(), Some(&head_tree), None)?;

        let mut files = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            files.push(AffectedFile::new(path, status));
        }

        Ok(files)
    }
}
