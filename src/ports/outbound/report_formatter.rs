use crate::shared::Result;
use crate::summary_generation::domain::{FetchReport, SummaryReport};

/// ReportFormatter port for rendering run reports
///
/// The same report can go to the console as text and to a file as JSON.
pub trait ReportFormatter {
    /// Formats the outcome of a fetch run
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_fetch(&self, report: &FetchReport) -> Result<String>;

    /// Formats the outcome of a summary run
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_summary(&self, report: &SummaryReport) -> Result<String>;
}
