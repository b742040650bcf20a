use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Returns the full commit message of the commit `refspec` points at.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the reference cannot be resolved
    /// to a commit and [`GitError::MessageNotUtf8`] if the message is not
    /// valid UTF-8.
    pub fn commit_message(&self, refspec: &str) -> Result<String> {
        let commit = self
            .inner
            .revparse_single(refspec)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        commit
            .message()
            .map(ToOwned::to_owned)
            .ok_or_else(|| GitError::MessageNotUtf8 {
                refspec: refspec.to_string(),
            })
    }
}
