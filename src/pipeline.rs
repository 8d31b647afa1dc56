//! Composition helpers shared by the two binaries: config resolution, the
//! summary stage wiring, report output and fatal-error handling.

use crate::adapters::outbound::console::StderrProgressReporter;
use crate::adapters::outbound::filesystem::{CsvFileReader, FileSystemWriter, StdoutPresenter};
use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
use crate::adapters::outbound::spreadsheet::XlsxTemplateWriter;
use crate::application::dto::SummarizeRequest;
use crate::application::use_cases::GenerateSummariesUseCase;
use crate::config::{
    discover_config, load_config_from_path, ConfigFile, PathSettings, DEFAULT_CONFIG_FILE,
};
use crate::ports::outbound::{OutputPresenter, ReportFormatter};
use crate::shared::error::ExitCode;
use crate::shared::Result;
use crate::summary_generation::domain::{FetchReport, SummaryReport};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

/// A loaded config file (if any) and the path it was looked up at
pub struct LoadedConfig {
    pub file: Option<ConfigFile>,
    pub path: PathBuf,
}

/// Loads the config file named on the command line, or `./config.yaml` if it exists.
///
/// An explicitly named file must exist; the default one is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    match explicit {
        Some(path) => Ok(LoadedConfig {
            file: Some(load_config_from_path(path)?),
            path: path.to_path_buf(),
        }),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            Ok(LoadedConfig {
                file: discover_config(&path)?,
                path,
            })
        }
    }
}

/// Runs Group → Summarize with the filesystem and xlsx adapters
pub fn run_summaries(settings: &PathSettings, systems: Vec<String>) -> Result<SummaryReport> {
    let use_case = GenerateSummariesUseCase::new(
        CsvFileReader::new(),
        XlsxTemplateWriter::new(
            settings.template.clone(),
            settings.summaries_dir.clone(),
            settings.sheets.clone(),
        ),
        StderrProgressReporter::new(),
    );

    let request = SummarizeRequest::new(
        settings.data_dir.clone(),
        settings.summaries_dir.clone(),
        systems,
    );
    use_case.execute(request)
}

/// Prints the fetch report to stdout and optionally writes it as JSON
pub fn present_fetch_report(report: &FetchReport, report_json: Option<&Path>) -> Result<()> {
    let text = text_formatter().format_fetch(report)?;
    StdoutPresenter::new().present(&text)?;

    if let Some(path) = report_json {
        let json = JsonReportFormatter::new().format_fetch(report)?;
        FileSystemWriter::new(path.to_path_buf()).present(&json)?;
    }
    Ok(())
}

/// Prints the summary report to stdout and optionally writes it as JSON
pub fn present_summary_report(report: &SummaryReport, report_json: Option<&Path>) -> Result<()> {
    let text = text_formatter().format_summary(report)?;
    StdoutPresenter::new().present(&text)?;

    if let Some(path) = report_json {
        let json = JsonReportFormatter::new().format_summary(report)?;
        FileSystemWriter::new(path.to_path_buf()).present(&json)?;
    }
    Ok(())
}

fn text_formatter() -> TextReportFormatter {
    TextReportFormatter::new(std::io::stdout().is_terminal())
}

/// Prints the error with its cause chain and exits with
/// [`ExitCode::ApplicationError`]
pub fn exit_with_error(error: anyhow::Error) -> ! {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }

    eprintln!();
    process::exit(ExitCode::ApplicationError.as_i32());
}
