use crate::application::dto::FetchRequest;
use crate::ports::outbound::{AttachmentStore, ProgressReporter, StoreOutcome, TicketRepository};
use crate::shared::error::PipelineError;
use crate::shared::Result;
use crate::summary_generation::domain::{FetchReport, Ticket, TicketKey, TicketOutcome};
use crate::summary_generation::services::local_file_names;
use std::collections::HashSet;

/// FetchAttachmentsUseCase - downloads the CSV attachments of a list of tickets
///
/// Failures are recorded per ticket (or per attachment) and never stop the
/// batch; the returned [`FetchReport`] carries them.
///
/// # Type Parameters
/// * `TR` - TicketRepository implementation
/// * `AS` - AttachmentStore implementation
/// * `PR` - ProgressReporter implementation
pub struct FetchAttachmentsUseCase<TR, AS, PR> {
    ticket_repository: TR,
    attachment_store: AS,
    progress_reporter: PR,
}

impl<TR, AS, PR> FetchAttachmentsUseCase<TR, AS, PR>
where
    TR: TicketRepository,
    AS: AttachmentStore,
    PR: ProgressReporter,
{
    pub fn new(ticket_repository: TR, attachment_store: AS, progress_reporter: PR) -> Self {
        Self {
            ticket_repository,
            attachment_store,
            progress_reporter,
        }
    }

    /// Processes every distinct ticket key in input order
    ///
    /// # Errors
    /// Returns an error only when the request names no ticket at all
    pub fn execute(&self, request: FetchRequest) -> Result<FetchReport> {
        let keys = unique_keys(&request.ticket_keys);
        if keys.is_empty() {
            anyhow::bail!("No ticket keys to process");
        }

        self.progress_reporter
            .report(&format!("📋 Processing {} ticket(s)", keys.len()));

        let mut report = FetchReport::new(request.data_dir);
        for raw_key in keys {
            let outcome = self.process_ticket(&raw_key);
            report.tickets.push(outcome);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Fetch complete: {} file(s) downloaded, {} unchanged",
            report.files_downloaded(),
            report.files_unchanged()
        ));

        Ok(report)
    }

    fn process_ticket(&self, raw_key: &str) -> TicketOutcome {
        let key = match TicketKey::new(raw_key) {
            Ok(key) => key,
            Err(e) => {
                let mut outcome = TicketOutcome::new(raw_key);
                let error = PipelineError::InvalidTicketKey {
                    key: raw_key.to_string(),
                    reason: e.to_string(),
                };
                self.progress_reporter.report_error(&format!("❌ {}", error));
                outcome.errors.push(error.to_string());
                return outcome;
            }
        };

        let mut outcome = TicketOutcome::new(key.as_str());
        self.progress_reporter
            .report(&format!("🔍 Fetching ticket {}...", key));

        let ticket = match self.ticket_repository.fetch_ticket(&key) {
            Ok(ticket) => ticket,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ {}: {}", key, e));
                outcome.errors.push(e.to_string());
                return outcome;
            }
        };

        outcome.found = true;
        outcome.summary = Some(ticket.summary.clone());
        self.download_csv_attachments(&ticket, &mut outcome);
        outcome
    }

    fn download_csv_attachments(&self, ticket: &Ticket, outcome: &mut TicketOutcome) {
        let attachments = ticket.csv_attachments();
        outcome.csv_count = attachments.len();

        if attachments.is_empty() {
            let warning = format!("No CSV attachments found on {}", ticket.key);
            self.progress_reporter
                .report_warning(&format!("⚠️  {}", warning));
            outcome.warnings.push(warning);
            return;
        }

        self.progress_reporter.report(&format!(
            "   Found {} CSV attachment(s) on {}",
            attachments.len(),
            ticket.key
        ));

        let names = local_file_names(&ticket.key, &attachments);
        let total = attachments.len();

        for (index, (attachment, file_name)) in attachments.iter().zip(&names).enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(file_name.as_str()));

            let content = match self.ticket_repository.download_attachment(attachment) {
                Ok(content) => content,
                Err(e) => {
                    let error = format!("Failed to download {}: {}", attachment.filename, e);
                    self.progress_reporter.report_error(&format!("❌ {}", error));
                    outcome.errors.push(error);
                    continue;
                }
            };

            match self.attachment_store.store(file_name, &content) {
                Ok(StoreOutcome::Written(path)) => outcome.downloaded.push(path),
                Ok(StoreOutcome::Unchanged(path)) => outcome.unchanged.push(path),
                Err(e) => {
                    let error = format!("Failed to save {}: {:#}", file_name, e);
                    self.progress_reporter.report_error(&format!("❌ {}", error));
                    outcome.errors.push(error);
                }
            }
        }

        self.progress_reporter
            .report_progress(total, total, Some("done"));
    }
}

/// Trims, drops blanks and removes case-insensitive duplicates, keeping the
/// first occurrence
fn unique_keys(raw_keys: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw_keys
        .iter()
        .map(|key| key.trim())
        .filter(|key| !key.is_empty())
        .filter(|key| seen.insert(key.to_uppercase()))
        .map(str::to_string)
        .collect()
}
