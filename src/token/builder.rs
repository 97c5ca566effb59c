use crate::error::TokenError;
use crate::token::issuer::{TokenIssuer, DEFAULT_TOKEN_EXPIRY};

/// Builder for [`TokenIssuer`].
///
/// Both keys are required and must be non-empty; the expiry defaults to
/// one hour.
#[derive(Debug, Clone)]
pub struct TokenIssuerBuilder {
    access_key: Option<String>,
    public_key: Option<String>,
    expiry_seconds: i64,
}

impl TokenIssuerBuilder {
    /// Create a builder with the default expiry.
    #[must_use]
    pub fn new() -> Self {
        TokenIssuerBuilder {
            access_key: None,
            public_key: None,
            expiry_seconds: DEFAULT_TOKEN_EXPIRY,
        }
    }

    /// Set the secret access key used as the HMAC key.
    #[must_use]
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set the public key included in the signed message and the output.
    #[must_use]
    pub fn public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Set the token lifetime in seconds.
    ///
    /// The upstream dashboard recognizes 300, 900, 1800, 3600 and 86400,
    /// but any positive value is accepted here; no whitelist is enforced.
    #[must_use]
    pub fn expiry_seconds(mut self, expiry_seconds: i64) -> Self {
        self.expiry_seconds = expiry_seconds;
        self
    }

    /// Validate and build the issuer.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if either key is missing or empty,
    /// or if the expiry is not positive.
    pub fn build(self) -> Result<TokenIssuer, TokenError> {
        let access_key = self
            .access_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TokenError::config("access key is required and must be non-empty"))?;

        let public_key = self
            .public_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TokenError::config("public key is required and must be non-empty"))?;

        if self.expiry_seconds <= 0 {
            return Err(TokenError::config(format!(
                "token expiry must be positive, got {}",
                self.expiry_seconds
            )));
        }

        Ok(TokenIssuer::from_validated(
            access_key,
            public_key,
            self.expiry_seconds,
        ))
    }
}

impl Default for TokenIssuerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
