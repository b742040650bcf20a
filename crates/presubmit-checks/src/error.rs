use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid path pattern")]
    Pattern(#[from] regex::Error),

    #[error("failed to launch '{program}'")]
    ToolLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;
