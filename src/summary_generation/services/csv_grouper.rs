use super::metadata_parser::parse_file_metadata;
use crate::summary_generation::domain::{
    CsvGroup, CsvTable, GroupingResult, MetadataError, UnparsedFile,
};
use std::path::PathBuf;

/// One scanned CSV file: its path and either its sample rows or a read error
pub type ScannedFile = (PathBuf, std::result::Result<CsvTable, String>);

/// CsvGrouper - assigns scanned CSV files to (hostname, firmware) groups
///
/// Pure domain service: reading the files is the caller's job.
pub struct CsvGrouper;

impl CsvGrouper {
    /// Groups files in the order given.
    ///
    /// Every input lands in exactly one group or in `unparsed`, so
    /// `result.total_file_count() == files.len()`.
    pub fn group(files: Vec<ScannedFile>) -> GroupingResult {
        let mut result = GroupingResult::default();

        for (path, sample) in files {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let parsed = match &sample {
                Ok(table) => parse_file_metadata(&file_name, Some(table)),
                Err(e) => Err(MetadataError::Unreadable(e.clone())),
            };

            match parsed {
                Ok(metadata) => {
                    let key = metadata.group_key();
                    result
                        .groups
                        .entry(key.clone())
                        .or_insert_with(|| CsvGroup::new(key))
                        .push(metadata.test_type, path);
                }
                Err(reason) => result.unparsed.push(UnparsedFile { path, reason }),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary_generation::domain::{GroupKey, TestType};

    fn sample(host: &str, test_type: &str) -> CsvTable {
        CsvTable::new(
            vec!["host".to_string(), "test_type".to_string()],
            vec![vec![host.to_string(), test_type.to_string()]],
        )
    }

    fn header_only() -> CsvTable {
        CsvTable::new(vec!["lane".to_string()], vec![])
    }

    #[test]
    fn test_prbs_and_data_files_share_one_group() {
        let files = vec![
            (
                PathBuf::from("data/bh-glx-b02u02_erisc_v1_7_103_data.csv"),
                Ok(header_only()),
            ),
            (
                PathBuf::from("data/bh-glx-b02u02_erisc_v1_7_103_prbs.csv"),
                Ok(header_only()),
            ),
        ];

        let result = CsvGrouper::group(files);

        assert_eq!(result.groups.len(), 1);
        let group = &result.groups[&GroupKey::new("bh-glx-b02u02", "erisc_v1_7_103")];
        assert_eq!(group.files(TestType::Prbs).len(), 1);
        assert_eq!(group.files(TestType::Data).len(), 1);
        assert!(result.unparsed.is_empty());
    }

    #[test]
    fn test_every_file_is_accounted_for() {
        let files = vec![
            (PathBuf::from("h1_erisc_v1_7_103_prbs.csv"), Ok(header_only())),
            (PathBuf::from("h1_erisc_v1_7_104_prbs.csv"), Ok(header_only())),
            (PathBuf::from("h2_erisc_v1_7_103_data.csv"), Ok(header_only())),
            (PathBuf::from("no_version_prbs.csv"), Ok(header_only())),
            (PathBuf::from("h3_erisc_v1_7_103_notes.csv"), Ok(header_only())),
            (PathBuf::from("h4_erisc_v1_7_103_prbs.csv"), Err("bad utf-8".to_string())),
        ];
        let count = files.len();

        let result = CsvGrouper::group(files);

        assert_eq!(result.groups.len(), 3);
        assert_eq!(result.unparsed.len(), 3);
        assert_eq!(result.total_file_count(), count);
    }

    #[test]
    fn test_unreadable_file_reason() {
        let result = CsvGrouper::group(vec![(
            PathBuf::from("h4_erisc_v1_7_103_prbs.csv"),
            Err("invalid UTF-8".to_string()),
        )]);
        assert_eq!(
            result.unparsed[0].reason,
            MetadataError::Unreadable("invalid UTF-8".to_string())
        );
    }

    #[test]
    fn test_content_hostname_groups_differently_named_files() {
        let files = vec![
            (
                PathBuf::from("SYS-1_run_a_erisc_v1_7_103_prbs.csv"),
                Ok(sample("bh-glx-b02u02", "TestType.SERDES_PRBS")),
            ),
            (
                PathBuf::from("SYS-2_run_b_erisc_v1_7_103.csv"),
                Ok(sample("bh-glx-b02u02", "TestType.SERDES_PRBS")),
            ),
        ];

        let result = CsvGrouper::group(files);

        assert_eq!(result.groups.len(), 1);
        let group = result.groups.values().next().unwrap();
        assert_eq!(
            group.prbs_files,
            vec![
                PathBuf::from("SYS-1_run_a_erisc_v1_7_103_prbs.csv"),
                PathBuf::from("SYS-2_run_b_erisc_v1_7_103.csv"),
            ]
        );
    }

    #[test]
    fn test_discovery_order_is_kept_within_group() {
        let files = vec![
            (PathBuf::from("SYS-2_h1_v1_0_0_prbs.csv"), Ok(header_only())),
            (PathBuf::from("SYS-1_h1_v1_0_0_prbs.csv"), Ok(header_only())),
        ];
        let result = CsvGrouper::group(files);
        let group = result.groups.values().next().unwrap();
        assert_eq!(group.prbs_files[0], PathBuf::from("SYS-2_h1_v1_0_0_prbs.csv"));
    }
}
