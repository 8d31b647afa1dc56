use crate::summary_generation::domain::{Attachment, Ticket, TicketKey};
use thiserror::Error;

/// Failure of a single tracker call, typed so callers can tell a missing
/// ticket apart from a credential problem
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Ticket {0} not found (404)")]
    NotFound(String),

    #[error("Not authorized to access {resource} (HTTP {status}); check EMAIL and API_KEY")]
    Unauthorized { resource: String, status: u16 },

    #[error("Jira returned HTTP {status} for {resource}")]
    Status { resource: String, status: u16 },

    #[error("Request for {resource} failed: {details}")]
    Transport { resource: String, details: String },

    #[error("Unexpected response for {resource}: {details}")]
    InvalidResponse { resource: String, details: String },
}

/// TicketRepository port for reading tickets and attachment bytes from the
/// issue tracker
///
/// Calls are blocking; implementations rely on their HTTP client's own
/// timeout and retry defaults.
pub trait TicketRepository {
    /// Checks that the configured credentials are accepted.
    /// Returns the display name of the authenticated account.
    fn verify_credentials(&self) -> Result<String, TrackerError>;

    /// Looks up a ticket with its summary and attachment list
    fn fetch_ticket(&self, key: &TicketKey) -> Result<Ticket, TrackerError>;

    /// Downloads the raw content of one attachment
    fn download_attachment(&self, attachment: &Attachment) -> Result<Vec<u8>, TrackerError>;
}
