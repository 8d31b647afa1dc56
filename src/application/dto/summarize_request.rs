use std::path::PathBuf;

/// SummarizeRequest - input of the summary generation use case
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    /// Directory scanned for `*.csv` files
    pub data_dir: PathBuf,
    /// Directory the workbooks are written to, echoed in the report
    pub output_dir: PathBuf,
    /// Hostnames to keep; empty keeps every group
    pub systems: Vec<String>,
}

impl SummarizeRequest {
    pub fn new(data_dir: PathBuf, output_dir: PathBuf, systems: Vec<String>) -> Self {
        Self {
            data_dir,
            output_dir,
            systems,
        }
    }
}
