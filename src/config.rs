//! Centralized configuration.
//!
//! All configuration is loaded from environment variables (with `.env`
//! support) and validated before an issuer is built.

use crate::error::TokenError;
use crate::token::{TokenIssuer, DEFAULT_TOKEN_EXPIRY};
use std::env;
use std::fmt;

/// Token issuer configuration.
#[derive(Clone)]
pub struct Config {
    /// Secret access key used as the HMAC key. Never transmitted.
    pub access_key: String,
    /// Public key identifying the caller.
    pub public_key: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `FCS_ACCESS_KEY` (required), `FCS_PUBLIC_KEY` (required) and
    /// `FCS_TOKEN_EXPIRY` (optional, seconds, default 3600).
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();

        let access_key = require_env("FCS_ACCESS_KEY")?;
        let public_key = require_env("FCS_PUBLIC_KEY")?;
        let token_expiry = parse_env("FCS_TOKEN_EXPIRY", DEFAULT_TOKEN_EXPIRY)?;

        if token_expiry <= 0 {
            return Err(TokenError::config(format!(
                "FCS_TOKEN_EXPIRY must be positive, got {}",
                token_expiry
            )));
        }

        Ok(Self {
            access_key,
            public_key,
            token_expiry,
        })
    }

    /// Build a validated [`TokenIssuer`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if either key is empty.
    pub fn issuer(&self) -> Result<TokenIssuer, TokenError> {
        TokenIssuer::builder()
            .access_key(self.access_key.clone())
            .public_key(self.public_key.clone())
            .expiry_seconds(self.token_expiry)
            .build()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &"[redacted]")
            .field("public_key", &self.public_key)
            .field("token_expiry", &self.token_expiry)
            .finish()
    }
}

/// Read a required, non-empty environment variable.
fn require_env(name: &str) -> Result<String, TokenError> {
    match env::var(name) {
        Ok(val) if !val.is_empty() => Ok(val),
        Ok(_) => Err(TokenError::config(format!("{} must not be empty", name))),
        Err(_) => Err(TokenError::config(format!("{} is required", name))),
    }
}

/// Parse environment variable with default value.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, TokenError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
