use std::fs;
use std::path::Path;

use presubmit_change::ChangeDescription;
use presubmit_checks::checks::{PerfettoTestsTagCheck, SqlModulesCheck};
use presubmit_checks::providers::SystemCommandRunner;
use presubmit_checks::{PresubmitContext, PresubmitEngine};
use presubmit_git::Repository;

use super::RunArgs;
use crate::error::{CliError, Result};
use crate::output::{PlainTextFormatter, ReportFormatter};

const CHECK_NAMES: [&str; 2] = [SqlModulesCheck::NAME, PerfettoTestsTagCheck::NAME];

pub(crate) fn run(args: RunArgs, start_path: &Path) -> Result<()> {
    validate_selection(&args.only)?;

    let repo = Repository::open(start_path)?;
    let affected_files = repo.changed_files(Some(&args.base), &args.head)?;

    let description = match args.description_file {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|source| CliError::DescriptionRead { path, source })?;
            ChangeDescription::new(text)
        }
        None => ChangeDescription::new(repo.commit_message(&args.head)?),
    };

    let context = PresubmitContext::new(start_path, affected_files, description);

    let runner = SystemCommandRunner::new();
    let sql_modules = SqlModulesCheck::new(args.python3, &runner);
    let perfetto_tests_tag = PerfettoTestsTagCheck::new()?;

    let mut engine = PresubmitEngine::new();
    if selected(&args.only, SqlModulesCheck::NAME) {
        engine.add_check(&sql_modules);
    }
    if selected(&args.only, PerfettoTestsTagCheck::NAME) {
        engine.add_check(&perfetto_tests_tag);
    }

    let report = engine.run(&context)?;
    let blocking = report
        .results()
        .filter(|result| result.level.is_blocking())
        .count();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let formatter = PlainTextFormatter;
        if blocking > 0 {
            eprint!("{}", formatter.format_report(&report));
        } else {
            print!("{}", formatter.format_report(&report));
        }
    }

    if blocking > 0 {
        return Err(CliError::BlockingResults { count: blocking });
    }
    Ok(())
}

fn validate_selection(only: &[String]) -> Result<()> {
    for name in only {
        if !CHECK_NAMES.contains(&name.as_str()) {
            return Err(CliError::UnknownCheck {
                name: name.clone(),
                available: CHECK_NAMES.join(", "),
            });
        }
    }
    Ok(())
}

fn selected(only: &[String], name: &str) -> bool {
    only.is_empty() || only.iter().any(|selected| selected == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_selects_every_check() {
        assert!(selected(&[], SqlModulesCheck::NAME));
        assert!(selected(&[], PerfettoTestsTagCheck::NAME));
    }

    #[test]
    fn explicit_selection_excludes_the_rest() {
        let only = vec![PerfettoTestsTagCheck::NAME.to_owned()];

        assert!(selected(&only, PerfettoTestsTagCheck::NAME));
        assert!(!selected(&only, SqlModulesCheck::NAME));
    }

    #[test]
    fn known_names_validate() {
        let only = vec![
            SqlModulesCheck::NAME.to_owned(),
            PerfettoTestsTagCheck::NAME.to_owned(),
        ];

        assert!(validate_selection(&only).is_ok());
    }

    #[test]
    fn unknown_name_is_rejected_with_the_available_set() {
        let only = vec!["bogus".to_owned()];

        let err = validate_selection(&only).expect_err("bogus should be rejected");

        let msg = err.to_string();
        assert!(msg.contains("'bogus'"));
        assert!(msg.contains(SqlModulesCheck::NAME));
        assert!(msg.contains(PerfettoTestsTagCheck::NAME));
    }
}
