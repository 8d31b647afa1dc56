use crate::shared::Result;
use crate::summary_generation::domain::CsvTable;
use std::path::{Path, PathBuf};

/// CsvReader port for scanning and reading the local data directory
pub trait CsvReader {
    /// Lists the CSV files directly inside `dir`, sorted by file name
    ///
    /// # Errors
    /// Returns an error if `dir` is missing, not a directory, or unreadable
    fn list_csv_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Reads the header and at most `max_rows` data rows
    fn read_sample(&self, path: &Path, max_rows: usize) -> Result<CsvTable>;

    /// Reads the whole file
    fn read_table(&self, path: &Path) -> Result<CsvTable>;
}
