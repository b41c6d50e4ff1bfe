//! Error types for graph loading and configuration.
//!
//! Loader errors never reach a query caller: the loader logs them and
//! reports the graph as not loaded instead.

use std::error::Error;
use std::fmt;

/// Result type for PrimeKG core operations.
pub type KgResult<T> = std::result::Result<T, KgError>;

/// Errors that can occur while reading the edge list or the configuration.
#[derive(Debug, Clone)]
pub enum KgError {
    /// I/O errors (wrapped).
    Io(String),
    /// The edge list could not be parsed as CSV.
    Csv(String),
    /// A required edge-list column is absent from the header.
    MissingColumn(String),
    /// Configuration errors.
    Config(ConfigError),
}

impl fmt::Display for KgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KgError::Io(msg) => write!(f, "I/O error: {}", msg),
            KgError::Csv(msg) => write!(f, "CSV error: {}", msg),
            KgError::MissingColumn(name) => write!(f, "Missing required column: {}", name),
            KgError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl Error for KgError {}

impl From<std::io::Error> for KgError {
    fn from(e: std::io::Error) -> Self {
        KgError::Io(e.to_string())
    }
}

impl From<csv::Error> for KgError {
    fn from(e: csv::Error) -> Self {
        KgError::Csv(e.to_string())
    }
}

impl From<ConfigError> for KgError {
    fn from(e: ConfigError) -> Self {
        KgError::Config(e)
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Invalid value.
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// The config file could not be parsed.
    Parse { path: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
            ConfigError::Parse { path, reason } => {
                write!(f, "Failed to parse {}: {}", path, reason)
            }
        }
    }
}

// Convenience constructors
impl KgError {
    pub fn missing_column(name: impl Into<String>) -> Self {
        KgError::MissingColumn(name.into())
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        KgError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}
