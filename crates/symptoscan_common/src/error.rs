//! Error types for SymptoScan.

use thiserror::Error;

/// Errors a symptom query can hit before any lookup happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymptomError {
    #[error("No symptoms provided.")]
    NoSymptoms,
}

/// Remote health-topics search failures. None of these reach the end user;
/// every variant degrades to the local resolver.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Empty API response")]
    EmptyBody,

    #[error("Unparseable response: {0}")]
    Parse(String),

    #[error("No topics in response")]
    NoResults,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Duplicate symptom key in fallback table: {0}")]
    DuplicateKey(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
