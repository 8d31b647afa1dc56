use clap::Parser;
use std::path::PathBuf;

/// Download CSV attachments from Jira tickets
#[derive(Parser, Debug)]
#[command(name = "jira-csv-fetch")]
#[command(version)]
#[command(
    about = "Download CSV attachments from Jira tickets",
    long_about = "Download CSV attachments from Jira tickets into a local data directory.\n\n\
                  Credentials are read from JIRA_SERVER_URL, EMAIL and API_KEY \
                  (environment or .env file)."
)]
pub struct FetchArgs {
    /// Ticket keys to process (e.g. SYS-2826). Defaults to `tickets` in the config file
    #[arg(value_name = "TICKET")]
    pub tickets: Vec<String>,

    /// Path to the YAML config file (defaults to ./config.yaml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to store downloaded CSV files in
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Also write the run report as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Generate per-system Excel summaries after fetching
    #[arg(long)]
    pub summarize: bool,
}

impl FetchArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Group CSV test results by system and firmware and write Excel summaries
#[derive(Parser, Debug)]
#[command(name = "csv-summarize")]
#[command(version)]
#[command(about = "Group CSV test results by system and firmware and write Excel summaries", long_about = None)]
pub struct SummarizeArgs {
    /// Only summarize these hostnames (e.g. -s bh-glx-b02u02 bh-glx-c01u01)
    #[arg(short, long, value_name = "HOST", num_args = 1..)]
    pub systems: Vec<String>,

    /// Path to the YAML config file (defaults to ./config.yaml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory containing the CSV files
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory to write the .xlsx summaries to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Excel template with the raw-data and summary sheets
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Also write the run report as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

impl SummarizeArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
