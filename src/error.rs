//! Error types for porkbun-ddns.

use thiserror::Error;

/// Result type alias for porkbun-ddns.
pub type Result<T> = std::result::Result<T, DdnsError>;

/// DDNS error types.
///
/// Every variant is fatal to the run: components return these upward and
/// only the binary entry point terminates the process.
#[derive(Error, Debug)]
pub enum DdnsError {
    /// Credentials file missing, unreadable, or not valid JSON.
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider unreachable or ping rejected.
    #[error("connectivity error: {0}")]
    Connectivity(String),

    /// Transport-level failure on an outbound call.
    #[error("network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status.
    #[error("api error ({target}): {message}")]
    Api { target: String, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for DdnsError {
    fn from(e: reqwest::Error) -> Self {
        DdnsError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for DdnsError {
    fn from(e: serde_json::Error) -> Self {
        DdnsError::Config(e.to_string())
    }
}
