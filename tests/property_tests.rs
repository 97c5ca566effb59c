//! Property-based tests for token issuance.
//!
//! Property 1: Expiry Arithmetic
//! Property 2: Deterministic Issuance
//! Property 3: Token Format
//! Property 4: Serialized Round-Trip
//! Property 5: Perturbation Sensitivity

use fcs_token::clock::FixedClock;
use fcs_token::token::{HmacSha256Signer, TokenIssuer, TokenRecord};
use proptest::prelude::*;

/// Generate arbitrary access keys.
fn arb_access_key() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{8,64}".prop_map(|s| s)
}

/// Generate arbitrary public keys.
fn arb_public_key() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,32}".prop_map(|s| s)
}

/// Generate arbitrary TTL (1 minute to 24 hours).
fn arb_ttl() -> impl Strategy<Value = i64> {
    60i64..86400i64
}

/// Generate arbitrary clock instants (2017 through 2033).
fn arb_now() -> impl Strategy<Value = i64> {
    1_500_000_000i64..2_000_000_000i64
}

fn issuer(access_key: &str, public_key: &str, ttl: i64) -> TokenIssuer {
    TokenIssuer::builder()
        .access_key(access_key)
        .public_key(public_key)
        .expiry_seconds(ttl)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1: Expiry Arithmetic
    ///
    /// Under a fixed clock `t`, the issued expiry is exactly `t + ttl`.
    #[test]
    fn prop_expiry_arithmetic(
        access_key in arb_access_key(),
        public_key in arb_public_key(),
        ttl in arb_ttl(),
        now in arb_now(),
    ) {
        let record = issuer(&access_key, &public_key, ttl)
            .generate_with(&FixedClock(now), &HmacSha256Signer)
            .unwrap();

        prop_assert_eq!(record.expiry, now + ttl, "Expiry must be clock plus TTL");
        prop_assert_eq!(&record.public_key, &public_key, "Public key must be echoed");
    }

    /// Property 2: Deterministic Issuance
    ///
    /// The same configuration and the same clock value always yield an
    /// identical record.
    #[test]
    fn prop_deterministic_issuance(
        access_key in arb_access_key(),
        public_key in arb_public_key(),
        ttl in arb_ttl(),
        now in arb_now(),
    ) {
        let issuer = issuer(&access_key, &public_key, ttl);
        let clock = FixedClock(now);

        let first = issuer.generate_with(&clock, &HmacSha256Signer).unwrap();
        let second = issuer.generate_with(&clock, &HmacSha256Signer).unwrap();

        prop_assert_eq!(first, second, "Issuance must be deterministic");
    }

    /// Property 3: Token Format
    ///
    /// Every token is exactly 64 lowercase hex characters.
    #[test]
    fn prop_token_format(
        access_key in arb_access_key(),
        public_key in arb_public_key(),
        ttl in arb_ttl(),
        now in arb_now(),
    ) {
        let record = issuer(&access_key, &public_key, ttl)
            .generate_with(&FixedClock(now), &HmacSha256Signer)
            .unwrap();

        prop_assert_eq!(record.token.len(), 64, "Token must be 64 characters");
        prop_assert!(
            record.token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
            "Token must match [0-9a-f]{{64}}, got {}",
            record.token
        );
    }

    /// Property 4: Serialized Round-Trip
    ///
    /// Parsing the serialized output recovers the exact record.
    #[test]
    fn prop_serialized_round_trip(
        access_key in arb_access_key(),
        public_key in arb_public_key(),
        ttl in arb_ttl(),
        now in arb_now(),
    ) {
        let record = issuer(&access_key, &public_key, ttl)
            .generate_with(&FixedClock(now), &HmacSha256Signer)
            .unwrap();

        let json = record.to_json().unwrap();
        let parsed: TokenRecord = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(parsed, record, "Round-trip must be lossless");
    }

    /// Property 5: Perturbation Sensitivity
    ///
    /// Changing the access key, the public key, or the clock changes the
    /// token.
    #[test]
    fn prop_perturbation_sensitivity(
        access_key in arb_access_key(),
        other_key in arb_access_key(),
        public_key in arb_public_key(),
        other_public in arb_public_key(),
        ttl in arb_ttl(),
        now in arb_now(),
    ) {
        let clock = FixedClock(now);
        let base = issuer(&access_key, &public_key, ttl)
            .generate_with(&clock, &HmacSha256Signer)
            .unwrap();

        if access_key != other_key {
            let changed = issuer(&other_key, &public_key, ttl)
                .generate_with(&clock, &HmacSha256Signer)
                .unwrap();
            prop_assert_ne!(&base.token, &changed.token, "Access key change must change token");
        }

        if public_key != other_public {
            let changed = issuer(&access_key, &other_public, ttl)
                .generate_with(&clock, &HmacSha256Signer)
                .unwrap();
            prop_assert_ne!(&base.token, &changed.token, "Public key change must change token");
        }

        let shifted = issuer(&access_key, &public_key, ttl)
            .generate_with(&FixedClock(now + 1), &HmacSha256Signer)
            .unwrap();
        prop_assert_ne!(&base.token, &shifted.token, "Clock change must change token");
    }
}
