use jira_csv_summary::ports::outbound::TrackerError;
use jira_csv_summary::prelude::*;
use jira_csv_summary::summary_generation::domain::{Attachment, Ticket};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock TicketRepository serving tickets and attachment bytes from memory
#[derive(Default, Clone)]
pub struct MockTicketRepository {
    tickets: HashMap<String, Ticket>,
    contents: HashMap<String, Vec<u8>>,
    unauthorized: Vec<String>,
    pub fetched: Arc<Mutex<Vec<String>>>,
    pub downloaded: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a ticket whose attachments are `(id, filename, content)`
    pub fn with_ticket(mut self, key: &str, attachments: &[(&str, &str, &str)]) -> Self {
        let ticket = Ticket {
            key: TicketKey::new(key).unwrap(),
            summary: format!("Test results for {}", key),
            attachments: attachments
                .iter()
                .map(|(id, filename, content)| {
                    self.contents
                        .insert(id.to_string(), content.as_bytes().to_vec());
                    Attachment {
                        id: id.to_string(),
                        filename: filename.to_string(),
                        size: content.len() as u64,
                        mime_type: Some("text/csv".to_string()),
                        content_url: format!("https://jira.example.com/attachment/{}", id),
                    }
                })
                .collect(),
        };
        self.tickets.insert(key.to_string(), ticket);
        self
    }

    /// Makes every request for this ticket fail with HTTP 403
    pub fn with_unauthorized(mut self, key: &str) -> Self {
        self.unauthorized.push(key.to_string());
        self
    }

    pub fn fetched_keys(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn download_count(&self) -> usize {
        self.downloaded.lock().unwrap().len()
    }
}

impl TicketRepository for MockTicketRepository {
    fn verify_credentials(&self) -> std::result::Result<String, TrackerError> {
        Ok("Mock User".to_string())
    }

    fn fetch_ticket(&self, key: &TicketKey) -> std::result::Result<Ticket, TrackerError> {
        self.fetched.lock().unwrap().push(key.to_string());

        if self.unauthorized.iter().any(|k| k == key.as_str()) {
            return Err(TrackerError::Unauthorized {
                resource: key.to_string(),
                status: 403,
            });
        }

        self.tickets
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(key.to_string()))
    }

    fn download_attachment(&self, attachment: &Attachment) -> std::result::Result<Vec<u8>, TrackerError> {
        self.downloaded.lock().unwrap().push(attachment.id.clone());
        self.contents
            .get(&attachment.id)
            .cloned()
            .ok_or_else(|| TrackerError::Transport {
                resource: attachment.content_url.clone(),
                details: "connection reset".to_string(),
            })
    }
}
