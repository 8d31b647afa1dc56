use jira_csv_summary::adapters::outbound::console::StderrProgressReporter;
use jira_csv_summary::adapters::outbound::filesystem::FileSystemAttachmentStore;
use jira_csv_summary::adapters::outbound::network::JiraTicketRepository;
use jira_csv_summary::application::dto::FetchRequest;
use jira_csv_summary::application::use_cases::FetchAttachmentsUseCase;
use jira_csv_summary::cli::FetchArgs;
use jira_csv_summary::config::{Credentials, PathSettings};
use jira_csv_summary::pipeline::{
    exit_with_error, load_config, present_fetch_report, present_summary_report, run_summaries,
};
use jira_csv_summary::ports::outbound::TicketRepository;
use jira_csv_summary::shared::error::{ExitCode, PipelineError};
use jira_csv_summary::shared::Result;
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => exit_with_error(e),
    }
}

fn run() -> Result<ExitCode> {
    let args = FetchArgs::parse_args();

    // A missing .env file is fine; the variables may come from the environment.
    let _ = dotenvy::dotenv();

    let config = load_config(args.config.as_deref())?;
    let mut settings = PathSettings::from_config(config.file.as_ref());
    if let Some(data_dir) = args.data_dir {
        settings.data_dir = data_dir;
    }

    let ticket_keys = if args.tickets.is_empty() {
        config
            .file
            .as_ref()
            .map(|file| file.ticket_keys())
            .unwrap_or_default()
    } else {
        args.tickets
    };
    if ticket_keys.iter().all(|key| key.trim().is_empty()) {
        return Err(PipelineError::NoTickets { path: config.path }.into());
    }

    let credentials = Credentials::from_env()?;
    let repository = JiraTicketRepository::new(&credentials)?;

    eprintln!("🔐 Connecting to {}...", repository.server());
    let account = repository
        .verify_credentials()
        .map_err(|e| PipelineError::AuthenticationFailed {
            server: repository.server().to_string(),
            details: e.to_string(),
        })?;
    eprintln!("✅ Authenticated as {}", account);

    let store = FileSystemAttachmentStore::open(&settings.data_dir)?;
    let use_case = FetchAttachmentsUseCase::new(repository, store, StderrProgressReporter::new());
    let report = use_case.execute(FetchRequest::new(ticket_keys, settings.data_dir.clone()))?;

    present_fetch_report(&report, args.report_json.as_deref())?;
    let mut failed = report.has_errors();

    if args.summarize {
        if report.tickets.iter().all(|t| t.stored_count() == 0) {
            eprintln!("⚠️  No CSV files were fetched; skipping summaries");
        } else {
            let summary = run_summaries(&settings, Vec::new())?;
            present_summary_report(&summary, None)?;
            failed |= summary.has_errors();
        }
    }

    Ok(if failed {
        ExitCode::ItemsFailed
    } else {
        ExitCode::Success
    })
}
