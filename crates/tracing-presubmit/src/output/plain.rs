use presubmit_checks::PresubmitReport;
use presubmit_core::{CheckLevel, CheckResult};

use super::ReportFormatter;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    /// Section headers and their order match the review host's output, which
    /// prints messages first and errors last, closest to the prompt.
    const SECTIONS: [(CheckLevel, &'static str); 3] = [
        (CheckLevel::Notify, "** Presubmit Messages **"),
        (CheckLevel::Warning, "** Presubmit Warnings **"),
        (CheckLevel::Error, "** Presubmit ERRORS **"),
    ];

    fn format_section(output: &mut String, header: &str, results: &[&CheckResult]) {
        if results.is_empty() {
            return;
        }

        output.push_str(header);
        output.push('\n');
        for result in results {
            output.push_str(&result.message);
            output.push('\n');
        }
        output.push('\n');
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format_report(&self, report: &PresubmitReport) -> String {
        let mut output = String::new();

        for (level, header) in Self::SECTIONS {
            let results: Vec<&CheckResult> = report
                .results()
                .filter(|result| result.level == level)
                .collect();
            Self::format_section(&mut output, header, &results);
        }

        if report.is_clean() {
            output.push_str("All presubmit checks passed\n");
        } else {
            let count = report.result_count();
            output.push_str(&format!("{count} presubmit result(s), see above\n"));
        }

        output
    }
}
