use crate::application::dto::SummarizeRequest;
use crate::ports::outbound::{CsvReader, GroupSummaryData, ProgressReporter, SummaryWriter};
use crate::shared::error::PipelineError;
use crate::shared::Result;
use crate::summary_generation::domain::{
    CsvGroup, CsvTable, GroupOutcome, SummaryReport, TestType, UnparsedEntry,
};
use crate::summary_generation::services::{CsvGrouper, ScannedFile, TableMerger};
use std::path::PathBuf;

/// Rows read per file to detect hostname and test type
const SAMPLE_ROWS: usize = 1;

/// GenerateSummariesUseCase - groups the CSV files of a directory and writes
/// one workbook per (hostname, firmware version)
///
/// # Type Parameters
/// * `CR` - CsvReader implementation
/// * `SW` - SummaryWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSummariesUseCase<CR, SW, PR> {
    csv_reader: CR,
    summary_writer: SW,
    progress_reporter: PR,
}

impl<CR, SW, PR> GenerateSummariesUseCase<CR, SW, PR>
where
    CR: CsvReader,
    SW: SummaryWriter,
    PR: ProgressReporter,
{
    pub fn new(csv_reader: CR, summary_writer: SW, progress_reporter: PR) -> Self {
        Self {
            csv_reader,
            summary_writer,
            progress_reporter,
        }
    }

    /// Runs Group → Summarize for one data directory
    ///
    /// # Errors
    /// Fails when the directory is missing or has no CSV files, or when no
    /// group is left after parsing and system filtering. Per-group failures
    /// are recorded in the report instead.
    pub fn execute(&self, request: SummarizeRequest) -> Result<SummaryReport> {
        // Step 1: Discover files
        self.progress_reporter.report(&format!(
            "📂 Scanning {} for CSV files...",
            request.data_dir.display()
        ));
        let files = self.csv_reader.list_csv_files(&request.data_dir)?;
        if files.is_empty() {
            return Err(PipelineError::InvalidDataDirectory {
                path: request.data_dir.clone(),
                reason: "No CSV files found".to_string(),
            }
            .into());
        }

        // Step 2: Group by metadata
        let scanned: Vec<ScannedFile> = files
            .into_iter()
            .map(|path| {
                let sample = self
                    .csv_reader
                    .read_sample(&path, SAMPLE_ROWS)
                    .map_err(|e| format!("{:#}", e));
                (path, sample)
            })
            .collect();

        let mut report = SummaryReport::new(request.output_dir);
        report.files_scanned = scanned.len();

        let mut grouping = CsvGrouper::group(scanned);
        for unparsed in grouping.unparsed.drain(..) {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Skipping {}: {}",
                unparsed.path.display(),
                unparsed.reason
            ));
            report.unparsed.push(UnparsedEntry {
                path: unparsed.path,
                reason: unparsed.reason.to_string(),
            });
        }

        self.progress_reporter.report(&format!(
            "✅ Found {} system+firmware combination(s)",
            grouping.groups.len()
        ));

        // Step 3: Apply the system filter
        if !request.systems.is_empty() {
            report.missing_systems = grouping.retain_systems(&request.systems);
            for system in &report.missing_systems {
                self.progress_reporter
                    .report_warning(&format!("⚠️  No CSV files found for system '{}'", system));
            }
        }

        if grouping.groups.is_empty() {
            if request.systems.is_empty() {
                anyhow::bail!(
                    "None of the {} CSV file(s) could be grouped by hostname and firmware version",
                    report.files_scanned
                );
            }
            anyhow::bail!(
                "No CSV files found for the requested system(s): {}",
                request.systems.join(", ")
            );
        }

        // Step 4: Merge and write one workbook per group
        let total = grouping.groups.len();
        for (index, group) in grouping.groups.into_values().enumerate() {
            let label = format!("{}_{}", group.key.hostname, group.key.firmware_version);
            self.progress_reporter
                .report_progress(index, total, Some(label.as_str()));

            let outcome = self.summarize_group(group);
            for warning in &outcome.warnings {
                self.progress_reporter
                    .report_warning(&format!("⚠️  {}: {}", label, warning));
            }
            if let Some(error) = &outcome.error {
                self.progress_reporter
                    .report_error(&format!("❌ {}: {}", label, error));
            }
            report.groups.push(outcome);
        }
        self.progress_reporter
            .report_progress(total, total, Some("done"));

        self.progress_reporter.report_completion(&format!(
            "✅ Summaries complete: {} generated, {} failed",
            report.success_count(),
            report.error_count()
        ));

        Ok(report)
    }

    fn summarize_group(&self, group: CsvGroup) -> GroupOutcome {
        let mut outcome = GroupOutcome::new(group.key.clone(), group.file_count());

        let prbs = self.merge_files(group.files(TestType::Prbs), &mut outcome.warnings);
        let data = self.merge_files(group.files(TestType::Data), &mut outcome.warnings);
        outcome.prbs_rows = prbs.as_ref().map_or(0, CsvTable::row_count);
        outcome.data_rows = data.as_ref().map_or(0, CsvTable::row_count);

        if prbs.is_none() && data.is_none() {
            outcome.error = Some("No data rows in any CSV file of this group".to_string());
            return outcome;
        }

        let summary = GroupSummaryData {
            key: group.key,
            prbs,
            data,
        };

        match self.summary_writer.write_summary(&summary) {
            Ok(written) => {
                outcome.output = Some(written.path);
                outcome.warnings.extend(written.warnings);
            }
            Err(e) => outcome.error = Some(format!("{:#}", e)),
        }

        outcome
    }

    /// Concatenates the given files; `None` when no file contributed a row
    fn merge_files(&self, files: &[PathBuf], warnings: &mut Vec<String>) -> Option<CsvTable> {
        let mut merger = TableMerger::new();

        for path in files {
            let source = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            match self.csv_reader.read_table(path) {
                Ok(table) if table.is_empty() => {
                    warnings.push(format!("{} has no data rows", source));
                }
                Ok(table) => merger.push(&source, table),
                Err(e) => warnings.push(format!("Skipped {}: {:#}", source, e)),
            }
        }

        if merger.row_count() == 0 {
            None
        } else {
            Some(merger.finish())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::WrittenSummary;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::Path;

    struct MemoryCsvReader {
        files: Vec<(PathBuf, CsvTable)>,
    }

    impl MemoryCsvReader {
        fn find(&self, path: &Path) -> Result<CsvTable> {
            self.files
                .iter()
                .find(|(p, _)| p == path)
                .map(|(_, t)| t.clone())
                .ok_or_else(|| anyhow::anyhow!("unreadable"))
        }
    }

    impl CsvReader for MemoryCsvReader {
        fn list_csv_files(&self, _dir: &Path) -> Result<Vec<PathBuf>> {
            Ok(self.files.iter().map(|(p, _)| p.clone()).collect())
        }

        fn read_sample(&self, path: &Path, max_rows: usize) -> Result<CsvTable> {
            let mut table = self.find(path)?;
            table.rows.truncate(max_rows);
            Ok(table)
        }

        fn read_table(&self, path: &Path) -> Result<CsvTable> {
            self.find(path)
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        written: RefCell<HashMap<String, GroupSummaryData>>,
        fail_for: Option<String>,
    }

    impl SummaryWriter for RecordingWriter {
        fn write_summary(&self, summary: &GroupSummaryData) -> Result<WrittenSummary> {
            let name = summary.key.output_file_name();
            if self.fail_for.as_deref() == Some(summary.key.hostname.as_str()) {
                anyhow::bail!("Sheet 'raw data' not found in template");
            }
            self.written.borrow_mut().insert(name.clone(), summary.clone());
            Ok(WrittenSummary {
                path: PathBuf::from("summaries").join(name),
                warnings: Vec::new(),
            })
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_warning(&self, _message: &str) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn csv(host: &str, test_type: &str, values: &[&str]) -> CsvTable {
        CsvTable::new(
            vec!["host".to_string(), "test_type".to_string(), "value".to_string()],
            values
                .iter()
                .map(|v| vec![host.to_string(), test_type.to_string(), v.to_string()])
                .collect(),
        )
    }

    fn request(systems: &[&str]) -> SummarizeRequest {
        SummarizeRequest::new(
            PathBuf::from("data"),
            PathBuf::from("summaries"),
            systems.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn reader() -> MemoryCsvReader {
        MemoryCsvReader {
            files: vec![
                (
                    PathBuf::from("data/SYS-1_bh-glx-b02u02_erisc_v1_7_103_prbs.csv"),
                    csv("bh-glx-b02u02", "TestType.SERDES_PRBS", &["1", "2"]),
                ),
                (
                    PathBuf::from("data/SYS-2_bh-glx-b02u02_erisc_v1_7_103_prbs.csv"),
                    csv("bh-glx-b02u02", "TestType.SERDES_PRBS", &["3"]),
                ),
                (
                    PathBuf::from("data/SYS-1_bh-glx-b02u02_erisc_v1_7_103_data.csv"),
                    csv("bh-glx-b02u02", "TestType.SIMPLE_PACKET", &["4"]),
                ),
                (
                    PathBuf::from("data/SYS-3_bh-glx-c01u01_erisc_v1_7_104_data.csv"),
                    csv("bh-glx-c01u01", "TestType.SIMPLE_PACKET", &["5"]),
                ),
                (
                    PathBuf::from("data/SYS-4_readme.csv"),
                    CsvTable::new(vec!["note".to_string()], vec![]),
                ),
            ],
        }
    }

    #[test]
    fn test_groups_merge_rows_from_every_file() {
        let use_case =
            GenerateSummariesUseCase::new(reader(), RecordingWriter::default(), SilentReporter);

        let report = use_case.execute(request(&[])).unwrap();

        assert_eq!(report.files_scanned, 5);
        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.unparsed.len(), 1);
        assert_eq!(report.success_count(), 2);

        let written = use_case.summary_writer.written.borrow();
        let summary = &written["bh-glx-b02u02_erisc_v1_7_103.xlsx"];
        let prbs = summary.prbs.as_ref().unwrap();
        assert_eq!(prbs.row_count(), 3);
        assert_eq!(prbs.headers.last().map(String::as_str), Some("source_file"));
        assert_eq!(summary.data.as_ref().unwrap().row_count(), 1);

        let data_only = &written["bh-glx-c01u01_erisc_v1_7_104.xlsx"];
        assert!(data_only.prbs.is_none());
    }

    #[test]
    fn test_system_filter_reports_missing_systems() {
        let use_case =
            GenerateSummariesUseCase::new(reader(), RecordingWriter::default(), SilentReporter);

        let report = use_case
            .execute(request(&["bh-glx-c01u01", "bh-glx-z99u99"]))
            .unwrap();

        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].key.hostname, "bh-glx-c01u01");
        assert_eq!(report.missing_systems, vec!["bh-glx-z99u99"]);
    }

    #[test]
    fn test_filter_matching_nothing_fails() {
        let use_case =
            GenerateSummariesUseCase::new(reader(), RecordingWriter::default(), SilentReporter);

        let err = use_case.execute(request(&["bh-glx-z99u99"])).unwrap_err();
        assert!(err.to_string().contains("bh-glx-z99u99"));
    }

    #[test]
    fn test_writer_failure_is_recorded_per_group() {
        let writer = RecordingWriter {
            fail_for: Some("bh-glx-b02u02".to_string()),
            ..Default::default()
        };
        let use_case = GenerateSummariesUseCase::new(reader(), writer, SilentReporter);

        let report = use_case.execute(request(&[])).unwrap();

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.error_count(), 1);
        let failed = report.groups.iter().find(|g| !g.succeeded()).unwrap();
        assert!(failed.error.as_ref().unwrap().contains("raw data"));
    }

    #[test]
    fn test_group_without_rows_is_an_error() {
        let reader = MemoryCsvReader {
            files: vec![(
                PathBuf::from("data/h1_v1_0_0_prbs.csv"),
                CsvTable::new(vec!["lane".to_string()], vec![]),
            )],
        };
        let use_case = GenerateSummariesUseCase::new(reader, RecordingWriter::default(), SilentReporter);

        let report = use_case.execute(request(&[])).unwrap();

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.groups[0].warnings, vec!["h1_v1_0_0_prbs.csv has no data rows"]);
        assert!(use_case.summary_writer.written.borrow().is_empty());
    }

    #[test]
    fn test_empty_directory_fails() {
        let use_case = GenerateSummariesUseCase::new(
            MemoryCsvReader { files: vec![] },
            RecordingWriter::default(),
            SilentReporter,
        );
        let err = use_case.execute(request(&[])).unwrap_err();
        assert!(err.to_string().contains("No CSV files found"));
    }

    #[test]
    fn test_nothing_groupable_fails() {
        let reader = MemoryCsvReader {
            files: vec![(
                PathBuf::from("data/readme.csv"),
                CsvTable::new(vec!["note".to_string()], vec![]),
            )],
        };
        let use_case = GenerateSummariesUseCase::new(reader, RecordingWriter::default(), SilentReporter);
        assert!(use_case.execute(request(&[])).is_err());
    }
}
