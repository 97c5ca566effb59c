use crate::error::TokenError;
use serde::{Deserialize, Serialize};

/// An issued token, ready for transport to a frontend client.
///
/// Wire field names carry the `_` prefix the consuming client script
/// expects; `_expiry` is a JSON number, never a quoted string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Lowercase hex HMAC-SHA256 digest, 64 characters.
    #[serde(rename = "_token")]
    pub token: String,

    /// Unix timestamp (seconds) at which the token becomes invalid.
    #[serde(rename = "_expiry")]
    pub expiry: i64,

    /// Public key echoed from the issuer.
    #[serde(rename = "_public_key")]
    pub public_key: String,
}

impl TokenRecord {
    /// Render the record as a JSON object with exactly the three wire fields.
    pub fn to_json(&self) -> Result<String, TokenError> {
        serde_json::to_string(self).map_err(TokenError::from)
    }

    /// Render the record as HTML meta tags for embedding in a document head.
    #[must_use]
    pub fn to_meta_tags(&self) -> String {
        format!(
            "<meta name=\"fcs-public-key\" content=\"{}\">\n\
             <meta name=\"fcs-token\" content=\"{}\">\n\
             <meta name=\"fcs-token-expiry\" content=\"{}\">",
            self.public_key, self.token, self.expiry
        )
    }

    /// Whether the token is expired as of `now` (Unix seconds).
    ///
    /// Signature verification is the backend's job; this only checks the
    /// expiry half of the contract, e.g. before reusing a cached record.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expiry
    }
}
