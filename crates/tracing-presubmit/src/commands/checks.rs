use presubmit_checks::checks::{PerfettoTestsTagCheck, SqlModulesCheck};
use presubmit_core::PRESUBMIT_API_VERSION;

use crate::error::Result;

pub(crate) fn run() -> Result<()> {
    println!("Registered presubmit checks (API version {PRESUBMIT_API_VERSION}):");
    println!();

    for (name, description) in [
        (SqlModulesCheck::NAME, SqlModulesCheck::DESCRIPTION),
        (PerfettoTestsTagCheck::NAME, PerfettoTestsTagCheck::DESCRIPTION),
    ] {
        println!("  {name:<20} {description}");
    }

    Ok(())
}
