mod checks;
mod run;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run presubmit checks on a change
    Run(RunArgs),
    /// List the registered presubmit checks
    Checks,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    /// Base revision to diff against
    #[arg(long, default_value = "origin/main")]
    pub base: String,

    /// Head revision holding the change under review
    #[arg(long, default_value = "HEAD")]
    pub head: String,

    /// Read the change description from a file instead of the head commit message
    #[arg(long, value_name = "PATH")]
    pub description_file: Option<PathBuf>,

    /// Python interpreter used to run the SQL module checker
    #[arg(long, default_value = "python3")]
    pub python3: PathBuf,

    /// Run only the named checks (may be repeated)
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Print the report as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Run(args) => run::run(args, start_path),
            Self::Checks => checks::run(),
        }
    }
}
