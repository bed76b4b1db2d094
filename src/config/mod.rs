#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::sheets::DEFAULT_SHEETS_API_BASE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

const DEFAULT_REPORT_RANGE: &str = "report_02!A:G";
const DEFAULT_ALLOWLIST_RANGE: &str = "allowlist!A:A";

/// Process-wide configuration, populated once at startup from the
/// environment or a TOML file and injected into the collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub spreadsheet: SpreadsheetConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetConfig {
    pub id: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub api_key: Option<String>,
    #[serde(default = "default_report_range")]
    pub report_range: String,
    #[serde(default = "default_allowlist_range")]
    pub allowlist_range: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioConfig {
    pub api_key: Option<String>,
}

fn default_api_base() -> String {
    DEFAULT_SHEETS_API_BASE.to_string()
}

fn default_report_range() -> String {
    DEFAULT_REPORT_RANGE.to_string()
}

fn default_allowlist_range() -> String {
    DEFAULT_ALLOWLIST_RANGE.to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            spreadsheet: SpreadsheetConfig {
                id: env::var("SPREADSHEET_ID").map_err(|_| LookupError::MissingConfigError {
                    field: "SPREADSHEET_ID".to_string(),
                })?,
                api_base: env::var("SHEETS_API_BASE")
                    .unwrap_or_else(|_| default_api_base()),
                api_key: env::var("SHEETS_API_KEY").ok(),
                report_range: env::var("REPORT_RANGE")
                    .unwrap_or_else(|_| default_report_range()),
                allowlist_range: env::var("ALLOWLIST_RANGE")
                    .unwrap_or_else(|_| default_allowlist_range()),
            },
            audio: AudioConfig {
                api_key: env::var("AUDIO_API_KEY").ok(),
            },
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LookupError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LookupError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with the process environment so
    /// secrets never need to live in the config file itself.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn audio_api_key(&self) -> Result<&String> {
        validation::validate_required_field("audio.api_key", &self.audio.api_key)
    }
}

impl ConfigProvider for AppConfig {
    fn report_range(&self) -> &str {
        &self.spreadsheet.report_range
    }

    fn allowlist_range(&self) -> &str {
        &self.spreadsheet.allowlist_range
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("spreadsheet.id", &self.spreadsheet.id)?;
        validation::validate_url("spreadsheet.api_base", &self.spreadsheet.api_base)?;
        validation::validate_sheet_range(
            "spreadsheet.report_range",
            &self.spreadsheet.report_range,
        )?;
        validation::validate_sheet_range(
            "spreadsheet.allowlist_range",
            &self.spreadsheet.allowlist_range,
        )?;
        Ok(())
    }
}
