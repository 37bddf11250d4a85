//! Error types for OpenRouter operations

use thiserror::Error;

/// Result type for OpenRouter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during OpenRouter operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("OpenRouter request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status returned by the API
    #[error("OpenRouter API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication or credential error
    #[error("OpenRouter authentication error: {0}")]
    Auth(String),

    /// Response body did not have the expected shape
    #[error("Malformed OpenRouter response: {0}")]
    MalformedResponse(String),
}
