//! Keyed-MAC signing trait and the HMAC-SHA256 implementation.

use crate::error::TokenError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Keyed message authentication capability.
///
/// The signer is a seam: `generate()` uses [`HmacSha256Signer`], and tests
/// or alternative providers can substitute their own implementation.
pub trait TokenSigner: Send + Sync {
    /// Compute the authentication code for `message` under `key`.
    fn sign(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, TokenError>;

    /// Algorithm name for diagnostics.
    fn algorithm(&self) -> &str;
}

/// HMAC-SHA256 signer. Produces a 32-byte digest for any key length.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha256Signer;

impl TokenSigner for HmacSha256Signer {
    fn sign(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, TokenError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(key)
            .map_err(|e| TokenError::crypto(format!("HMAC-SHA256 key setup failed: {}", e)))?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn algorithm(&self) -> &str {
        "HMAC-SHA256"
    }
}
