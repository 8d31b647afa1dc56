use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for both binaries.
///
/// Batch runs keep going when single tickets or groups fail, so a finished run
/// with failures is distinguished from a run that could not start at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every ticket / group was processed without errors
    Success = 0,
    /// The run completed, but at least one ticket or group failed
    ItemsFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Fatal error before or during the run (config, credentials, I/O)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ItemsFailed => write!(f, "Items Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-level errors that abort a run or a single item.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Config file not found: {path}\n\n💡 Hint: Create config.yaml with a 'tickets' list, or pass ticket keys on the command line")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Missing required configuration: {}\n\n💡 Hint: Set these in your environment or in a .env file", .variables.join(", "))]
    MissingCredentials { variables: Vec<String> },

    #[error("No tickets to process\n\n💡 Hint: Add at least one ticket key to the 'tickets' list in {path}, or pass ticket keys as arguments")]
    NoTickets { path: PathBuf },

    #[error("Invalid ticket key '{key}': {reason}")]
    InvalidTicketKey { key: String, reason: String },

    #[error("Failed to authenticate with Jira at {server}\nDetails: {details}\n\n💡 Hint: Check JIRA_SERVER_URL, EMAIL and API_KEY")]
    AuthenticationFailed { server: String, details: String },

    #[error("Invalid data directory: {path}\nReason: {reason}\n\n💡 Hint: Run jira-csv-fetch first, or point --data-dir at a directory of CSV files")]
    InvalidDataDirectory { path: PathBuf, reason: String },

    #[error("Template file not found: {path}\n\n💡 Hint: Pass --template or set 'template' in config.yaml")]
    TemplateNotFound { path: PathBuf },

    #[error("Sheet '{sheet}' not found in template {path}")]
    SheetNotFound { sheet: String, path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ItemsFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::ItemsFailed), "Items Failed (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_missing_credentials_lists_every_variable() {
        let error = PipelineError::MissingCredentials {
            variables: vec!["EMAIL".to_string(), "API_KEY".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("EMAIL, API_KEY"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_config_not_found_display() {
        let error = PipelineError::ConfigNotFound {
            path: PathBuf::from("config.yaml"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Config file not found: config.yaml"));
    }

    #[test]
    fn test_sheet_not_found_display() {
        let error = PipelineError::SheetNotFound {
            sheet: "raw data".to_string(),
            path: PathBuf::from("template.xlsx"),
        };
        assert_eq!(
            format!("{}", error),
            "Sheet 'raw data' not found in template template.xlsx"
        );
    }

    #[test]
    fn test_security_error_display() {
        let error = PipelineError::SecurityError {
            path: PathBuf::from("/data/link.csv"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Remove the link".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/data/link.csv"));
        assert!(display.contains("Remove the link"));
    }
}
