mod formatter;
mod plain;

pub(crate) use formatter::ReportFormatter;
pub(crate) use plain::PlainTextFormatter;
