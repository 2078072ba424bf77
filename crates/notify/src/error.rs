//! Error types for the notifier.

use thiserror::Error;

/// Errors that can occur while sending a review notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Mandatory environment variable is missing
    #[error("{0} environment variable is not set")]
    MissingConfig(&'static str),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}
