use jira_csv_summary::ports::outbound::{GroupSummaryData, WrittenSummary};
use jira_csv_summary::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock SummaryWriter recording the merged data it is given
#[derive(Default, Clone)]
pub struct MockSummaryWriter {
    pub written: Arc<Mutex<Vec<GroupSummaryData>>>,
}

#[allow(dead_code)]
impl MockSummaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summaries(&self) -> Vec<GroupSummaryData> {
        self.written.lock().unwrap().clone()
    }
}

impl SummaryWriter for MockSummaryWriter {
    fn write_summary(&self, summary: &GroupSummaryData) -> Result<WrittenSummary> {
        self.written.lock().unwrap().push(summary.clone());
        Ok(WrittenSummary {
            path: PathBuf::from("summaries").join(summary.key.output_file_name()),
            warnings: Vec::new(),
        })
    }
}
