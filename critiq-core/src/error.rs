//! Error types for critiq

use thiserror::Error;

/// Result type alias for critiq operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for critiq operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Submitted code failed validation; the generator is never invoked
    #[error("Validation error: {0}")]
    Validation(String),

    /// The generator call failed or returned an unusable payload
    #[error("Generation error: {0}")]
    Generation(String),

    /// The review was generated but could not be stored
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "database")]
impl From<critiq_db::Error> for Error {
    fn from(e: critiq_db::Error) -> Self {
        Error::Persistence(e.to_string())
    }
}
