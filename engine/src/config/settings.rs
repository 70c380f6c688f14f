// Engine settings, loaded from an optional JSON file and environment overrides
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::EngineError;

pub const CONFIG_ENV: &str = "CPI_TRACKER_CONFIG";
pub const DATA_ENV: &str = "CPI_TRACKER_DATA";
pub const DELIMITER_ENV: &str = "CPI_TRACKER_DELIMITER";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    /// Fixed location of the index file, read once at startup.
    pub data_path: PathBuf,
    pub columns: ColumnSettings,
}

/// Which header names hold the date and the index, and how fields are separated.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ColumnSettings {
    pub date_column: String,
    pub value_column: String,
    pub delimiter: char,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            data_path: PathBuf::from("cpi_data.csv"),
            columns: ColumnSettings::default(),
        }
    }
}

impl Default for ColumnSettings {
    fn default() -> Self {
        ColumnSettings {
            date_column: "Date".to_string(),
            value_column: "CPI".to_string(),
            delimiter: ',',
        }
    }
}

impl ColumnSettings {
    /// The csv reader only takes single-byte delimiters.
    pub fn delimiter_byte(&self) -> Result<u8, EngineError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(|b| b.is_ascii())
            .ok_or_else(|| {
                EngineError::ConfigError(format!(
                    "Delimiter '{}' must be a single ASCII character",
                    self.delimiter
                ))
            })
    }
}

impl EngineSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(raw)
            .map_err(|e| EngineError::ConfigError(format!("Invalid settings JSON: {}", e)))?;
        settings.columns.delimiter_byte()?;
        Ok(settings)
    }

    /// Defaults, then the file named by `CPI_TRACKER_CONFIG`, then the
    /// `CPI_TRACKER_DATA` / `CPI_TRACKER_DELIMITER` overrides.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
        let mut settings = match lookup(CONFIG_ENV) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(data_path) = lookup(DATA_ENV) {
            settings.data_path = PathBuf::from(data_path);
        }
        if let Some(delimiter) = lookup(DELIMITER_ENV) {
            let mut chars = delimiter.chars();
            settings.columns.delimiter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(EngineError::ConfigError(format!(
                        "{} must be a single character, got '{}'",
                        DELIMITER_ENV, delimiter
                    )))
                }
            };
            settings.columns.delimiter_byte()?;
        }

        Ok(settings)
    }
}
