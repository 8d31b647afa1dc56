use crate::shared::Result;
use crate::summary_generation::domain::{CsvTable, GroupKey};
use std::path::PathBuf;

/// Merged rows of one group, ready to be written
#[derive(Debug, Clone)]
pub struct GroupSummaryData {
    pub key: GroupKey,
    pub prbs: Option<CsvTable>,
    pub data: Option<CsvTable>,
}

/// What a writer produced for one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSummary {
    pub path: PathBuf,
    /// Non-fatal issues, such as a summary sheet missing from the template
    pub warnings: Vec<String>,
}

/// SummaryWriter port for rendering one group into a spreadsheet
pub trait SummaryWriter {
    /// Writes `{hostname}_{firmware_version}.xlsx` for the group
    ///
    /// # Errors
    /// Returns an error if the template is missing or lacks a sheet needed
    /// for the data present, or if the workbook cannot be saved
    fn write_summary(&self, summary: &GroupSummaryData) -> Result<WrittenSummary>;
}
