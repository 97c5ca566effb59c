use crate::clock::{Clock, SystemClock};
use crate::error::TokenError;
use crate::token::builder::TokenIssuerBuilder;
use crate::token::record::TokenRecord;
use crate::token::signer::{HmacSha256Signer, TokenSigner};
use std::fmt;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Default token lifetime in seconds (1 hour).
pub const DEFAULT_TOKEN_EXPIRY: i64 = 3600;

/// The access key. Never serialized, redacted from `Debug`, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct AccessKey(String);

impl AccessKey {
    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(..)")
    }
}

/// Issues expiring HMAC-SHA256 tokens for frontend authentication.
///
/// Immutable after construction: issuing reads the clock and performs a
/// pure MAC computation, so one instance can be shared across any number
/// of threads without locking.
///
/// The signed message is the public key concatenated with the decimal
/// expiry timestamp, no separator. A verifier holding the same access key
/// recomputes `HMAC-SHA256(access_key, public_key + expiry)` and compares.
#[derive(Clone)]
pub struct TokenIssuer {
    access_key: AccessKey,
    public_key: String,
    expiry_seconds: i64,
}

impl TokenIssuer {
    /// Start building an issuer.
    #[must_use]
    pub fn builder() -> TokenIssuerBuilder {
        TokenIssuerBuilder::new()
    }

    /// Create an issuer with the default 1 hour expiry.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if either key is empty.
    pub fn new(
        access_key: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Result<Self, TokenError> {
        TokenIssuerBuilder::new()
            .access_key(access_key)
            .public_key(public_key)
            .build()
    }

    pub(crate) fn from_validated(
        access_key: String,
        public_key: String,
        expiry_seconds: i64,
    ) -> Self {
        Self {
            access_key: AccessKey(access_key),
            public_key,
            expiry_seconds,
        }
    }

    /// Issue a token against the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Crypto`] if the HMAC primitive fails; this is
    /// an environment defect and propagates unrecovered.
    pub fn generate(&self) -> Result<TokenRecord, TokenError> {
        self.generate_with(&SystemClock, &HmacSha256Signer)
    }

    /// Issue a token with injected clock and signer capabilities.
    ///
    /// Deterministic given a fixed clock value: the same configuration and
    /// the same instant always produce the same token.
    pub fn generate_with(
        &self,
        clock: &dyn Clock,
        signer: &dyn TokenSigner,
    ) -> Result<TokenRecord, TokenError> {
        let expiry = clock.now() + self.expiry_seconds;

        // Canonical message: public key then decimal expiry, no separator.
        // Verifiers reproduce this byte-for-byte.
        let message = format!("{}{}", self.public_key, expiry);

        let digest = signer.sign(self.access_key.as_bytes(), message.as_bytes())?;
        let token = hex::encode(digest);

        debug!(
            public_key = %self.public_key,
            expiry,
            algorithm = signer.algorithm(),
            "issued frontend token"
        );

        Ok(TokenRecord {
            token,
            expiry,
            public_key: self.public_key.clone(),
        })
    }

    /// Issue a token and render it as a JSON record.
    pub fn to_json(&self) -> Result<String, TokenError> {
        self.generate()?.to_json()
    }

    /// Issue a token and render it as HTML meta tags.
    pub fn meta_tags(&self) -> Result<String, TokenError> {
        Ok(self.generate()?.to_meta_tags())
    }

    /// The public key included in every issued record.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Configured token lifetime in seconds.
    #[must_use]
    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_key", &self.access_key)
            .field("public_key", &self.public_key)
            .field("expiry_seconds", &self.expiry_seconds)
            .finish()
    }
}
