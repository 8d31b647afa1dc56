use super::file_metadata::{GroupKey, MetadataError, TestType};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// All CSV files that share one (hostname, firmware version) pair,
/// split by test type and kept in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvGroup {
    pub key: GroupKey,
    pub prbs_files: Vec<PathBuf>,
    pub data_files: Vec<PathBuf>,
}

impl CsvGroup {
    pub fn new(key: GroupKey) -> Self {
        Self {
            key,
            prbs_files: Vec::new(),
            data_files: Vec::new(),
        }
    }

    pub fn push(&mut self, test_type: TestType, path: PathBuf) {
        match test_type {
            TestType::Prbs => self.prbs_files.push(path),
            TestType::Data => self.data_files.push(path),
        }
    }

    pub fn files(&self, test_type: TestType) -> &[PathBuf] {
        match test_type {
            TestType::Prbs => &self.prbs_files,
            TestType::Data => &self.data_files,
        }
    }

    pub fn file_count(&self) -> usize {
        self.prbs_files.len() + self.data_files.len()
    }
}

/// A CSV file that could not be assigned to any group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparsedFile {
    pub path: PathBuf,
    pub reason: MetadataError,
}

/// Outcome of grouping a data directory.
///
/// Every scanned file ends up in exactly one group or in `unparsed`.
#[derive(Debug, Clone, Default)]
pub struct GroupingResult {
    pub groups: BTreeMap<GroupKey, CsvGroup>,
    pub unparsed: Vec<UnparsedFile>,
}

impl GroupingResult {
    pub fn grouped_file_count(&self) -> usize {
        self.groups.values().map(CsvGroup::file_count).sum()
    }

    pub fn total_file_count(&self) -> usize {
        self.grouped_file_count() + self.unparsed.len()
    }

    /// Keeps only groups whose hostname is listed; returns the requested
    /// hostnames that matched nothing, in request order
    pub fn retain_systems(&mut self, systems: &[String]) -> Vec<String> {
        self.groups
            .retain(|key, _| systems.iter().any(|s| s == &key.hostname));

        systems
            .iter()
            .filter(|s| !self.groups.keys().any(|k| &k.hostname == *s))
            .cloned()
            .collect()
    }
}
