use crate::shared::Result;
use std::path::PathBuf;

/// Result of storing one attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The file was created or its content replaced
    Written(PathBuf),
    /// A file with identical content was already present
    Unchanged(PathBuf),
}

impl StoreOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            StoreOutcome::Written(p) | StoreOutcome::Unchanged(p) => p,
        }
    }
}

/// AttachmentStore port for persisting downloaded attachments locally
pub trait AttachmentStore {
    /// Stores `content` under `file_name` (a flat, already sanitized name).
    ///
    /// Storing the same name twice replaces the earlier content; storing
    /// identical content is a no-op reported as [`StoreOutcome::Unchanged`].
    fn store(&self, file_name: &str, content: &[u8]) -> Result<StoreOutcome>;
}
