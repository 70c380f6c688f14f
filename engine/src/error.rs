use serde::Serialize;
use shared::models::YearMonth;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Resource is empty")]
    EmptyResource,

    #[error("Column '{0}' not found in header")]
    MissingColumn(String),

    #[error("No usable rows in resource")]
    NoRows,

    #[error("Missing {field} month")]
    MissingRange { field: &'static str },

    #[error("Invalid month '{input}'")]
    InvalidMonth { input: String },

    #[error("No data between {start} and {end}")]
    RangeEmpty { start: YearMonth, end: YearMonth },

    #[error("Computation error: {0}")]
    ComputationError(String),
}

/// Coarse grouping of [`EngineError`] used when telling the user what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Resource,
    Validation,
    RangeEmpty,
    Computation,
    Config,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ConfigError(_) => ErrorKind::Config,
            EngineError::CsvSystemError { .. }
            | EngineError::IoError { .. }
            | EngineError::EmptyResource
            | EngineError::MissingColumn(_)
            | EngineError::NoRows => ErrorKind::Resource,
            EngineError::MissingRange { .. } | EngineError::InvalidMonth { .. } => {
                ErrorKind::Validation
            }
            EngineError::RangeEmpty { .. } => ErrorKind::RangeEmpty,
            EngineError::ComputationError(_) => ErrorKind::Computation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Error,
}

/// Transient, dismissable message shown to the user in place of a failed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: ErrorKind,
    pub title: String,
    pub description: String,
    pub status: NotificationStatus,
    pub duration_ms: u64,
    pub closable: bool,
}

const NOTIFICATION_DURATION_MS: u64 = 5000;

impl From<EngineError> for Notification {
    fn from(err: EngineError) -> Self {
        tracing::error!("Mapping EngineError to Notification: {:?}", err);
        let kind = err.kind();
        let (title, description) = match kind {
            ErrorKind::Resource => ("Error loading data", "Failed to load CPI data".to_string()),
            ErrorKind::Config => ("Configuration error", err.to_string()),
            ErrorKind::Validation => match &err {
                EngineError::InvalidMonth { input } => (
                    "Invalid date",
                    format!("'{}' is not a month, use YYYY-MM or MM/YYYY", input),
                ),
                _ => (
                    "Missing dates",
                    "Please select both a start and an end month".to_string(),
                ),
            },
            ErrorKind::RangeEmpty => (
                "No data in range",
                "No data was found for the selected dates".to_string(),
            ),
            // Computation details stay in the log.
            ErrorKind::Computation => (
                "Calculation error",
                "An error occurred while calculating the CPI change".to_string(),
            ),
        };
        Notification {
            kind,
            title: title.to_string(),
            description,
            status: NotificationStatus::Error,
            duration_ms: NOTIFICATION_DURATION_MS,
            closable: true,
        }
    }
}
