use crate::shared::Result;
use serde::Serialize;

/// Maximum length for ticket keys (security limit)
const MAX_TICKET_KEY_LENGTH: usize = 64;

/// NewType wrapper for a project-prefixed tracker key such as `SYS-2826`
///
/// Keys are trimmed and upper-cased on construction, so `sys-2826` and
/// ` SYS-2826 ` name the same ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TicketKey(String);

impl TicketKey {
    pub fn new(key: &str) -> Result<Self> {
        let key = key.trim().to_uppercase();

        if key.is_empty() {
            anyhow::bail!("Ticket key cannot be empty");
        }

        if key.len() > MAX_TICKET_KEY_LENGTH {
            anyhow::bail!(
                "Ticket key is too long ({} bytes). Maximum allowed: {} bytes",
                key.len(),
                MAX_TICKET_KEY_LENGTH
            );
        }

        let Some((project, number)) = key.rsplit_once('-') else {
            anyhow::bail!("Ticket key must look like PROJECT-123");
        };

        let project_ok = project
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && project
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !project_ok {
            anyhow::bail!("Ticket key project prefix must start with a letter and contain only letters, digits and underscores");
        }

        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!("Ticket key must end with an issue number");
        }

        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TicketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A file attached to a ticket, as listed by the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    pub size: u64,
    pub mime_type: Option<String>,
    pub content_url: String,
}

impl Attachment {
    /// True when the attachment name ends in `.csv`, in any letter case
    pub fn is_csv(&self) -> bool {
        self.filename.to_lowercase().ends_with(".csv")
    }
}

/// A ticket and the attachments it carries
#[derive(Debug, Clone)]
pub struct Ticket {
    pub key: TicketKey,
    pub summary: String,
    pub attachments: Vec<Attachment>,
}

impl Ticket {
    pub fn csv_attachments(&self) -> Vec<&Attachment> {
        self.attachments.iter().filter(|a| a.is_csv()).collect()
    }
}
