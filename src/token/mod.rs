//! Token issuance: the issuer, its builder, the output record, and the
//! keyed-MAC signer seam.

pub mod builder;
pub mod issuer;
pub mod record;
pub mod signer;

pub use builder::TokenIssuerBuilder;
pub use issuer::{TokenIssuer, DEFAULT_TOKEN_EXPIRY};
pub use record::TokenRecord;
pub use signer::{HmacSha256Signer, TokenSigner};
