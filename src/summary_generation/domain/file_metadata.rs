use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Category of a test-result CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TestType {
    Prbs,
    Data,
}

impl TestType {
    /// Value of the `test_type` column written by the PRBS test harness
    pub const PRBS_COLUMN_VALUE: &'static str = "TestType.SERDES_PRBS";
    /// Value of the `test_type` column written by the packet data test
    pub const DATA_COLUMN_VALUE: &'static str = "TestType.SIMPLE_PACKET";

    pub fn from_column_value(value: &str) -> Option<Self> {
        match value.trim() {
            Self::PRBS_COLUMN_VALUE => Some(TestType::Prbs),
            Self::DATA_COLUMN_VALUE => Some(TestType::Data),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TestType::Prbs => "PRBS",
            TestType::Data => "DATA",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// (hostname, firmware version) pair that identifies one summary workbook
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupKey {
    pub hostname: String,
    pub firmware_version: String,
}

impl GroupKey {
    pub fn new(hostname: impl Into<String>, firmware_version: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            firmware_version: firmware_version.into(),
        }
    }

    /// Output file name, `{hostname}_{firmware_version}.xlsx`
    pub fn output_file_name(&self) -> String {
        format!("{}_{}.xlsx", self.hostname, self.firmware_version)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.hostname, self.firmware_version)
    }
}

/// Grouping metadata extracted from one CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub hostname: String,
    pub firmware_version: String,
    pub test_type: TestType,
}

impl FileMetadata {
    pub fn group_key(&self) -> GroupKey {
        GroupKey::new(&self.hostname, &self.firmware_version)
    }
}

/// Why a file could not be assigned to a group
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("could not determine system hostname (no 'host' value and none in the file name)")]
    MissingHostname,
    #[error("could not find a firmware version like 'erisc_v1_7_103' or 'v1_7_103' in the file name")]
    MissingFirmwareVersion,
    #[error("could not identify test type (no recognized 'test_type' value and no 'prbs'/'data' in the file name)")]
    UnknownTestType,
    #[error("could not read CSV: {0}")]
    Unreadable(String),
}
