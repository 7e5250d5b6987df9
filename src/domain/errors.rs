//! Domain error types
//!
//! Every failure in an export run maps onto one of these variants. Third-party
//! error types (reqwest, csv, serde_json) are flattened into messages at the
//! boundary where they occur so the public surface stays crate-owned.

use thiserror::Error;

/// Main error type for fedreg-export
#[derive(Debug, Error)]
pub enum FedRegError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure or non-success HTTP status while fetching a page
    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    /// Response body did not match the expected page envelope
    #[error("Failed to decode response from {url}: {reason}")]
    DecodeFailed { url: String, reason: String },

    /// The output file could not be created or truncated
    #[error("Failed to open output file {path}: {reason}")]
    OutputOpenFailed { path: String, reason: String },

    /// A row could not be written, or buffered output could not be flushed
    #[error("Failed to write output: {0}")]
    WriteFailed(String),

    /// A pipeline stage panicked or was cancelled before reaching a result
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl FedRegError {
    /// Short, stable name of the error kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            FedRegError::Configuration(_) => "configuration",
            FedRegError::RequestFailed { .. } => "request_failed",
            FedRegError::DecodeFailed { .. } => "decode_failed",
            FedRegError::OutputOpenFailed { .. } => "output_open_failed",
            FedRegError::WriteFailed(_) => "write_failed",
            FedRegError::Pipeline(_) => "pipeline",
            FedRegError::Io(_) => "io",
        }
    }
}

impl From<std::io::Error> for FedRegError {
    fn from(err: std::io::Error) -> Self {
        FedRegError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for FedRegError {
    fn from(err: toml::de::Error) -> Self {
        FedRegError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<url::ParseError> for FedRegError {
    fn from(err: url::ParseError) -> Self {
        FedRegError::Configuration(format!("Invalid URL: {err}"))
    }
}
