use presubmit_checks::PresubmitReport;

pub(crate) trait ReportFormatter {
    fn format_report(&self, report: &PresubmitReport) -> String;
}
