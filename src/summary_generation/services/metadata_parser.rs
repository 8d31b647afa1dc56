//! Extraction of grouping metadata from a CSV file name and its first row.
//!
//! The naming convention is fragile, so every rule lives here behind
//! [`parse_file_metadata`]; the grouper only sees the result.

use crate::summary_generation::domain::{CsvTable, FileMetadata, MetadataError, TestType};
use regex::Regex;
use std::sync::LazyLock;

/// Column holding the system hostname
pub const HOST_COLUMN: &str = "host";
/// Column holding the test harness type
pub const TEST_TYPE_COLUMN: &str = "test_type";

static ERISC_FIRMWARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"erisc_v\d+_\d+_\d+").expect("valid regex"));
static PLAIN_FIRMWARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d+_\d+_\d+").expect("valid regex"));
/// `SYS-2826_` prefix added to every downloaded attachment
static TICKET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*-\d+_").expect("valid regex"));

/// Derives (hostname, firmware version, test type) for one CSV file.
///
/// * `file_name` - bare file name, e.g. `SYS-1_bh-glx-b02u02_erisc_v1_7_103_prbs.csv`
/// * `sample` - header and first data row of the file, when it could be read
///
/// Hostname and test type prefer the `host` / `test_type` columns and fall
/// back to the file name. Firmware always comes from the file name.
/// The function is pure: the same inputs always give the same result.
pub fn parse_file_metadata(
    file_name: &str,
    sample: Option<&CsvTable>,
) -> Result<FileMetadata, MetadataError> {
    let base = strip_csv_extension(file_name);
    let stem = strip_ticket_prefix(base);

    let (firmware_version, firmware_start) =
        find_firmware(stem).ok_or(MetadataError::MissingFirmwareVersion)?;

    let hostname = sample
        .and_then(|t| t.first_value(HOST_COLUMN))
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .or_else(|| hostname_from_file_name(stem, firmware_start))
        // A ticket-shaped hostname, e.g. `GLX-02_erisc_v1_7_103_prbs.csv`
        .or_else(|| hostname_from_file_name(base, base.len() - stem.len() + firmware_start))
        .ok_or(MetadataError::MissingHostname)?;

    let test_type = sample
        .and_then(|t| t.first_value(TEST_TYPE_COLUMN))
        .and_then(TestType::from_column_value)
        .or_else(|| test_type_from_file_name(stem))
        .ok_or(MetadataError::UnknownTestType)?;

    Ok(FileMetadata {
        hostname,
        firmware_version,
        test_type,
    })
}

fn strip_csv_extension(file_name: &str) -> &str {
    let len = file_name.len();
    if len >= 4 && file_name.is_char_boundary(len - 4) && file_name[len - 4..].eq_ignore_ascii_case(".csv") {
        &file_name[..len - 4]
    } else {
        file_name
    }
}

fn strip_ticket_prefix(stem: &str) -> &str {
    match TICKET_PREFIX.find(stem) {
        Some(m) => &stem[m.end()..],
        None => stem,
    }
}

/// First `erisc_vX_Y_Z`, otherwise first `vX_Y_Z`, with its byte offset
fn find_firmware(stem: &str) -> Option<(String, usize)> {
    ERISC_FIRMWARE
        .find(stem)
        .or_else(|| PLAIN_FIRMWARE.find(stem))
        .map(|m| (m.as_str().to_string(), m.start()))
}

fn hostname_from_file_name(stem: &str, firmware_start: usize) -> Option<String> {
    let host = stem[..firmware_start].trim_end_matches(['_', '-', ' ', '.']);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

fn test_type_from_file_name(stem: &str) -> Option<TestType> {
    let lower = stem.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.contains(&"prbs") {
        Some(TestType::Prbs)
    } else if tokens.contains(&"data") {
        Some(TestType::Data)
    } else {
        None
    }
}
