use crate::ports::outbound::{AttachmentStore, StoreOutcome};
use crate::shared::error::PipelineError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemAttachmentStore adapter that keeps downloads in one flat directory
///
/// Writes go through a temporary file in the same directory and are renamed
/// into place, so an interrupted run never leaves a half-written CSV behind.
pub struct FileSystemAttachmentStore {
    dir: PathBuf,
}

impl FileSystemAttachmentStore {
    /// Opens the store, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| PipelineError::FileWriteError {
            path: dir.clone(),
            details: format!("Failed to create data directory: {}", e),
        })?;

        if fs::symlink_metadata(&dir)?.is_symlink() {
            return Err(PipelineError::SecurityError {
                path: dir,
                reason: "Data directory is a symbolic link".to_string(),
                hint: "Point --data-dir at a real directory".to_string(),
            }
            .into());
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn target_path(&self, file_name: &str) -> Result<PathBuf> {
        let flat = Path::new(file_name)
            .file_name()
            .is_some_and(|n| n == file_name);
        if !flat || file_name.starts_with('.') {
            return Err(PipelineError::SecurityError {
                path: self.dir.join(file_name),
                reason: "Attachment file name is not a plain file name".to_string(),
                hint: "File names must be sanitized before storing".to_string(),
            }
            .into());
        }
        Ok(self.dir.join(file_name))
    }
}

impl AttachmentStore for FileSystemAttachmentStore {
    fn store(&self, file_name: &str, content: &[u8]) -> Result<StoreOutcome> {
        let path = self.target_path(file_name)?;

        if fs::symlink_metadata(&path).is_ok() {
            validate_not_symlink(&path, "write")?;
            if fs::read(&path).is_ok_and(|existing| existing == content) {
                return Ok(StoreOutcome::Unchanged(path));
            }
        }

        let write_error = |details: String| PipelineError::FileWriteError {
            path: path.clone(),
            details,
        };

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(content)
            .map_err(|e| write_error(e.to_string()))?;
        temp.persist(&path)
            .map_err(|e| write_error(e.error.to_string()))?;

        Ok(StoreOutcome::Written(path))
    }
}
