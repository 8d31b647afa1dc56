use jira_csv_summary::cli::SummarizeArgs;
use jira_csv_summary::config::PathSettings;
use jira_csv_summary::pipeline::{exit_with_error, load_config, present_summary_report, run_summaries};
use jira_csv_summary::shared::error::ExitCode;
use jira_csv_summary::shared::Result;
use std::process;

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => exit_with_error(e),
    }
}

fn run() -> Result<ExitCode> {
    let args = SummarizeArgs::parse_args();

    let config = load_config(args.config.as_deref())?;
    let mut settings = PathSettings::from_config(config.file.as_ref());
    if let Some(data_dir) = args.data_dir {
        settings.data_dir = data_dir;
    }
    if let Some(output_dir) = args.output_dir {
        settings.summaries_dir = output_dir;
    }
    if let Some(template) = args.template {
        settings.template = template;
    }

    let report = run_summaries(&settings, args.systems)?;
    present_summary_report(&report, args.report_json.as_deref())?;

    Ok(if report.has_errors() {
        ExitCode::ItemsFailed
    } else {
        ExitCode::Success
    })
}
