use crate::ports::outbound::OutputPresenter;
use crate::shared::error::PipelineError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter that writes a run report to a file
///
/// The report is written to a temporary file next to the target and renamed
/// over it, so a reader never sees a partial JSON document.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Directory the report lands in; `.` for a bare file name
    fn parent_directory(&self) -> Result<&Path> {
        let parent = match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };
        if !parent.is_dir() {
            return Err(PipelineError::FileWriteError {
                path: self.output_path.clone(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
        Ok(parent)
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(PipelineError::FileWriteError {
                    path: self.output_path.clone(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        let parent = self.parent_directory()?;
        self.validate_output_security()?;

        let write_error = |details: String| PipelineError::FileWriteError {
            path: self.output_path.clone(),
            details,
        };

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        temp.persist(&self.output_path)
            .map_err(|e| write_error(e.error.to_string()))?;

        eprintln!("✅ Report written: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter that prints the run report
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
