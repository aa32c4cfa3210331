//! Error types for the Whop client.

use thiserror::Error;

/// Result type for Whop client operations.
pub type Result<T> = std::result::Result<T, WhopError>;

/// Whop client errors.
#[derive(Debug, Error)]
pub enum WhopError {
    /// Transport error (connection failed, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the Whop API, raw body preserved
    #[error("Whop API error ({status}): {message}")]
    Api { status: u16, message: String },
}
