use std::path::PathBuf;

use presubmit_checks::CheckError;
use presubmit_git::GitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("git error")]
    Git(#[from] GitError),

    #[error("presubmit check failed to run")]
    Check(#[from] CheckError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to resolve path '{path}'")]
    StartPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read change description from '{path}'")]
    DescriptionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown check '{name}' (available: {available})")]
    UnknownCheck { name: String, available: String },

    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),

    #[error("{count} blocking presubmit result(s)")]
    BlockingResults { count: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;
