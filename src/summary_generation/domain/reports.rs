use super::file_metadata::GroupKey;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// What happened to one ticket during the fetch stage
#[derive(Debug, Clone, Serialize)]
pub struct TicketOutcome {
    pub ticket_key: String,
    pub found: bool,
    pub summary: Option<String>,
    pub csv_count: usize,
    pub downloaded: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl TicketOutcome {
    pub fn new(ticket_key: impl Into<String>) -> Self {
        Self {
            ticket_key: ticket_key.into(),
            found: false,
            summary: None,
            csv_count: 0,
            downloaded: Vec::new(),
            unchanged: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Files that are on disk after this ticket was processed
    pub fn stored_count(&self) -> usize {
        self.downloaded.len() + self.unchanged.len()
    }
}

/// Tally of a fetch run
#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub generated_at: DateTime<Utc>,
    pub data_dir: PathBuf,
    pub tickets: Vec<TicketOutcome>,
}

impl FetchReport {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            generated_at: Utc::now(),
            data_dir,
            tickets: Vec::new(),
        }
    }

    pub fn tickets_found(&self) -> usize {
        self.tickets.iter().filter(|t| t.found).count()
    }

    pub fn csv_attachments_found(&self) -> usize {
        self.tickets.iter().map(|t| t.csv_count).sum()
    }

    pub fn files_downloaded(&self) -> usize {
        self.tickets.iter().map(|t| t.downloaded.len()).sum()
    }

    pub fn files_unchanged(&self) -> usize {
        self.tickets.iter().map(|t| t.unchanged.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.tickets.iter().map(|t| t.errors.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// What happened to one (hostname, firmware) group during the summary stage
#[derive(Debug, Clone, Serialize)]
pub struct GroupOutcome {
    pub key: GroupKey,
    pub prbs_rows: usize,
    pub data_rows: usize,
    pub source_files: usize,
    pub output: Option<PathBuf>,
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

impl GroupOutcome {
    pub fn new(key: GroupKey, source_files: usize) -> Self {
        Self {
            key,
            prbs_rows: 0,
            data_rows: 0,
            source_files,
            output: None,
            error: None,
            warnings: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.output.is_some() && self.error.is_none()
    }
}

/// A file left out of every group, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct UnparsedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Tally of a summary run
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    pub files_scanned: usize,
    pub groups: Vec<GroupOutcome>,
    pub unparsed: Vec<UnparsedEntry>,
    pub missing_systems: Vec<String>,
}

impl SummaryReport {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            generated_at: Utc::now(),
            output_dir,
            files_scanned: 0,
            groups: Vec::new(),
            unparsed: Vec::new(),
            missing_systems: Vec::new(),
        }
    }

    pub fn success_count(&self) -> usize {
        self.groups.iter().filter(|g| g.succeeded()).count()
    }

    pub fn error_count(&self) -> usize {
        self.groups.len() - self.success_count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
