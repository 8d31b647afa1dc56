/// Formatter adapters for run reports
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonReportFormatter;
pub use text_formatter::TextReportFormatter;
