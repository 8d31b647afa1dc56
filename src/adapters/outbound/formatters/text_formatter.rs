use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::summary_generation::domain::{FetchReport, SummaryReport};
use owo_colors::OwoColorize;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// TextReportFormatter adapter for the console SUMMARY block
///
/// Colors the banner and non-zero error counts when `colored` is set.
pub struct TextReportFormatter {
    colored: bool,
}

impl TextReportFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn banner(&self, out: &mut String) {
        let rule = "=".repeat(RULE_WIDTH);
        out.push('\n');
        if self.colored {
            let _ = writeln!(out, "{}", rule.cyan());
            let _ = writeln!(out, "{}", "SUMMARY".bold());
            let _ = writeln!(out, "{}", rule.cyan());
        } else {
            let _ = writeln!(out, "{}\nSUMMARY\n{}", rule, rule);
        }
    }

    fn count(&self, count: usize) -> String {
        if self.colored && count > 0 {
            count.red().to_string()
        } else {
            count.to_string()
        }
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format_fetch(&self, report: &FetchReport) -> Result<String> {
        let mut out = String::new();
        self.banner(&mut out);

        writeln!(out, "Tickets processed: {}", report.tickets.len())?;
        writeln!(out, "Tickets found: {}", report.tickets_found())?;
        writeln!(out, "CSV attachments found: {}", report.csv_attachments_found())?;
        writeln!(out, "CSV files downloaded: {}", report.files_downloaded())?;
        writeln!(out, "CSV files unchanged: {}", report.files_unchanged())?;
        writeln!(out, "Errors encountered: {}", self.count(report.error_count()))?;

        if report.has_errors() {
            writeln!(out, "\nErrors:")?;
            for ticket in report.tickets.iter().filter(|t| !t.errors.is_empty()) {
                writeln!(out, "  {}:", ticket.ticket_key)?;
                for error in &ticket.errors {
                    writeln!(out, "    - {}", error)?;
                }
            }
        }

        if report.tickets.iter().any(|t| !t.warnings.is_empty()) {
            writeln!(out, "\nWarnings:")?;
            for ticket in report.tickets.iter().filter(|t| !t.warnings.is_empty()) {
                writeln!(out, "  {}:", ticket.ticket_key)?;
                for warning in &ticket.warnings {
                    writeln!(out, "    - {}", warning)?;
                }
            }
        }

        writeln!(
            out,
            "\nDownloaded files saved to: {}",
            report.data_dir.display()
        )?;
        Ok(out)
    }

    fn format_summary(&self, report: &SummaryReport) -> Result<String> {
        let mut out = String::new();
        self.banner(&mut out);

        writeln!(out, "CSV files scanned: {}", report.files_scanned)?;
        writeln!(
            out,
            "System+firmware combinations processed: {}",
            report.groups.len()
        )?;
        writeln!(out, "Successfully generated: {}", report.success_count())?;
        writeln!(out, "Errors: {}", self.count(report.error_count()))?;
        writeln!(out, "Unparsed files: {}", report.unparsed.len())?;

        let generated: Vec<_> = report.groups.iter().filter(|g| g.succeeded()).collect();
        if !generated.is_empty() {
            writeln!(out, "\nGenerated:")?;
            for group in generated {
                if let Some(path) = &group.output {
                    writeln!(
                        out,
                        "  {} ({} PRBS rows, {} data rows)",
                        path.display(),
                        group.prbs_rows,
                        group.data_rows
                    )?;
                }
            }
        }

        if report.has_errors() {
            writeln!(out, "\nFailed:")?;
            for group in report.groups.iter().filter(|g| !g.succeeded()) {
                writeln!(
                    out,
                    "  {}_{}: {}",
                    group.key.hostname,
                    group.key.firmware_version,
                    group.error.as_deref().unwrap_or("no output written")
                )?;
            }
        }

        if !report.unparsed.is_empty() {
            writeln!(out, "\nUnparsed:")?;
            for entry in &report.unparsed {
                writeln!(out, "  {}: {}", entry.path.display(), entry.reason)?;
            }
        }

        if !report.missing_systems.is_empty() {
            writeln!(
                out,
                "\nRequested systems not found: {}",
                report.missing_systems.join(", ")
            )?;
        }

        writeln!(out, "\nOutput directory: {}", report.output_dir.display())?;
        Ok(out)
    }
}
