//! jira-csv-summary - fetch CSV test results from Jira and summarize them in Excel
//!
//! Two stages share this library: `jira-csv-fetch` downloads the CSV
//! attachments of a list of tickets, and `csv-summarize` groups the CSV files
//! by system hostname and firmware version and writes one workbook per group
//! from an Excel template.
//!
//! # Architecture
//!
//! - **Domain Layer** (`summary_generation`): tickets, CSV tables, grouping and merging
//! - **Application Layer** (`application`): the fetch and summary use cases
//! - **Ports** (`ports`): interfaces to the tracker, filesystem, spreadsheet and console
//! - **Adapters** (`adapters`): reqwest, csv, zip/quick-xml and stderr implementations
//! - **Shared** (`shared`): error types, exit codes and path safety checks
//!
//! # Example
//!
//! ```no_run
//! use jira_csv_summary::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let settings = PathSettings::default();
//! let use_case = GenerateSummariesUseCase::new(
//!     CsvFileReader::new(),
//!     XlsxTemplateWriter::new(
//!         settings.template.clone(),
//!         settings.summaries_dir.clone(),
//!         settings.sheets.clone(),
//!     ),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = SummarizeRequest::new(settings.data_dir, settings.summaries_dir, vec![]);
//! let report = use_case.execute(request)?;
//! println!("{}", TextReportFormatter::new(false).format_summary(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod ports;
pub mod shared;
pub mod summary_generation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvFileReader, FileSystemAttachmentStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::network::JiraTicketRepository;
    pub use crate::adapters::outbound::spreadsheet::XlsxTemplateWriter;
    pub use crate::application::dto::{FetchRequest, SummarizeRequest};
    pub use crate::application::use_cases::{FetchAttachmentsUseCase, GenerateSummariesUseCase};
    pub use crate::config::{Credentials, PathSettings, SheetNames};
    pub use crate::ports::outbound::{
        AttachmentStore, CsvReader, OutputPresenter, ProgressReporter, ReportFormatter,
        SummaryWriter, TicketRepository,
    };
    pub use crate::summary_generation::domain::{
        CsvTable, FetchReport, GroupKey, SummaryReport, TestType, TicketKey,
    };
    pub use crate::summary_generation::services::{parse_file_metadata, CsvGrouper, TableMerger};
    pub use crate::shared::error::{ExitCode, PipelineError};
    pub use crate::shared::Result;
}
