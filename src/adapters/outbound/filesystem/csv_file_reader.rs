use crate::ports::outbound::CsvReader;
use crate::shared::error::PipelineError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use crate::summary_generation::domain::CsvTable;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// CsvFileReader adapter that reads test-result CSVs with the `csv` crate
///
/// Rows may be shorter or longer than the header (`flexible` mode); the
/// merger aligns them by column name afterwards.
pub struct CsvFileReader;

impl CsvFileReader {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, path: &Path, max_rows: Option<usize>) -> Result<CsvTable> {
        validate_regular_file(path, "CSV file")?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .with_context(|| format!("Failed to read header of {}", path.display()))?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            if max_rows.is_some_and(|max| rows.len() >= max) {
                break;
            }
            let record = record.with_context(|| {
                format!("Failed to parse row {} of {}", rows.len() + 2, path.display())
            })?;
            // Trailing blank lines are not data.
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(CsvTable::new(headers, rows))
    }
}

impl Default for CsvFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReader for CsvFileReader {
    fn list_csv_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(PipelineError::InvalidDataDirectory {
                path: dir.to_path_buf(),
                reason: if dir.exists() {
                    "Not a directory".to_string()
                } else {
                    "Directory does not exist".to_string()
                },
            }
            .into());
        }

        let entries = fs::read_dir(dir).map_err(|e| PipelineError::InvalidDataDirectory {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            // Symlinks are listed so the reader can reject them with a reason.
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            let is_csv = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if !is_dir && is_csv {
                files.push(entry.path());
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn read_sample(&self, path: &Path, max_rows: usize) -> Result<CsvTable> {
        self.read(path, Some(max_rows))
    }

    fn read_table(&self, path: &Path) -> Result<CsvTable> {
        self.read(path, None)
    }
}
