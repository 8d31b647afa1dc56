//! Configuration loading.
//!
//! Ticket lists and directory settings come from a YAML file (`config.yaml`);
//! Jira connection settings come from environment variables, optionally
//! populated from a `.env` file by the binaries. Both are loaded once into
//! plain structs and passed down explicitly.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::shared::error::PipelineError;
use crate::shared::Result;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_SUMMARIES_DIR: &str = "summaries";
pub const DEFAULT_TEMPLATE: &str = "system_data_template.xlsx";

pub const ENV_SERVER_URL: &str = "JIRA_SERVER_URL";
pub const ENV_EMAIL: &str = "EMAIL";
pub const ENV_API_KEY: &str = "API_KEY";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub tickets: Option<Vec<String>>,
    pub data_dir: Option<PathBuf>,
    pub summaries_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub sheets: Option<SheetNames>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Ticket keys listed in the file, trimmed, blanks dropped
    pub fn ticket_keys(&self) -> Vec<String> {
        self.tickets
            .iter()
            .flatten()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Sheet names inside the summary template
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SheetNames {
    pub raw_prbs: String,
    pub raw_data: String,
    pub prbs_summary: String,
    pub data_summary: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            raw_prbs: "raw prbs data".to_string(),
            raw_data: "raw data".to_string(),
            prbs_summary: "PRBS Summary".to_string(),
            data_summary: "DATA Summary".to_string(),
        }
    }
}

/// Directory, template and sheet settings after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSettings {
    pub data_dir: PathBuf,
    pub summaries_dir: PathBuf,
    pub template: PathBuf,
    pub sheets: SheetNames,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            summaries_dir: PathBuf::from(DEFAULT_SUMMARIES_DIR),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            sheets: SheetNames::default(),
        }
    }
}

impl PathSettings {
    pub fn from_config(config: Option<&ConfigFile>) -> Self {
        let defaults = Self::default();
        let Some(config) = config else {
            return defaults;
        };

        Self {
            data_dir: config.data_dir.clone().unwrap_or(defaults.data_dir),
            summaries_dir: config
                .summaries_dir
                .clone()
                .unwrap_or(defaults.summaries_dir),
            template: config.template.clone().unwrap_or(defaults.template),
            sheets: config.sheets.clone().unwrap_or(defaults.sheets),
        }
    }
}

/// Jira connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub server_url: String,
    pub email: String,
    pub api_key: String,
}

impl Credentials {
    /// Reads `JIRA_SERVER_URL`, `EMAIL` and `API_KEY` from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads credentials through `lookup`; blank values count as missing.
    ///
    /// # Errors
    /// Returns [`PipelineError::MissingCredentials`] naming every missing variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let server_url = read(ENV_SERVER_URL);
        let email = read(ENV_EMAIL);
        let api_key = read(ENV_API_KEY);

        match (server_url, email, api_key) {
            (Some(server_url), Some(email), Some(api_key)) => Ok(Self {
                server_url: server_url.trim_end_matches('/').to_string(),
                email,
                api_key,
            }),
            (server_url, email, api_key) => {
                let variables = [
                    (ENV_SERVER_URL, server_url.is_none()),
                    (ENV_EMAIL, email.is_none()),
                    (ENV_API_KEY, api_key.is_none()),
                ]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| name.to_string())
                .collect();
                Err(PipelineError::MissingCredentials { variables }.into())
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("server_url", &self.server_url)
            .field("email", &self.email)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(PipelineError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty config.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| PipelineError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Load config if the file exists. Returns `None` silently if not found.
pub fn discover_config(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }

    load_config_from_path(path).map(Some)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
