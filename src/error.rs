use thiserror::Error;

/// Errors from token issuing operations.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Missing, empty, or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HMAC primitive could not be initialized or executed.
    ///
    /// This indicates an environment defect, not bad input. It is not
    /// retried: there is nothing transient to wait out.
    #[error("Crypto failure: {0}")]
    Crypto(String),

    /// JSON rendering of the serialized form failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TokenError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        TokenError::Config(msg.into())
    }

    /// Create a crypto failure.
    #[must_use]
    pub fn crypto(msg: impl Into<String>) -> Self {
        TokenError::Crypto(msg.into())
    }
}
