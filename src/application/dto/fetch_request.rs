use std::path::PathBuf;

/// FetchRequest - input of the attachment fetch use case
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Ticket keys as given by the user; may contain duplicates or typos
    pub ticket_keys: Vec<String>,
    /// Directory the attachments are stored in, echoed in the report
    pub data_dir: PathBuf,
}

impl FetchRequest {
    pub fn new(ticket_keys: Vec<String>, data_dir: PathBuf) -> Self {
        Self {
            ticket_keys,
            data_dir,
        }
    }
}
