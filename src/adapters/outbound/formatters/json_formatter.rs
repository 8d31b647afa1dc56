use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::summary_generation::domain::{FetchReport, SummaryReport};

/// JsonReportFormatter adapter producing pretty-printed JSON reports
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format_fetch(&self, report: &FetchReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }

    fn format_summary(&self, report: &SummaryReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}
