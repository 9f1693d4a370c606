//! Property-based tests for session tokens

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use todogate::backend::auth::sessions::{token_ttl, TOKEN_TTL_SECS};
use todogate::backend::auth::TokenCodec;
use todogate::backend::error::TokenError;

fn codec() -> TokenCodec {
    TokenCodec::new(b"property-secret")
}

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

proptest! {
    #[test]
    fn prop_issue_then_verify_returns_username(
        username in "\\PC{0,40}",
        issued in 0i64..4_000_000_000,
        elapsed in 0i64..TOKEN_TTL_SECS,
    ) {
        let token = codec().issue(&username, at(issued)).unwrap();
        let verified = codec().verify(&token.value, at(issued + elapsed)).unwrap();
        prop_assert_eq!(verified, username);
    }

    #[test]
    fn prop_token_expires_after_ttl(
        username in "[a-z]{1,16}",
        issued in 0i64..4_000_000_000,
        late in 0i64..1_000_000,
    ) {
        let token = codec().issue(&username, at(issued)).unwrap();
        let now = at(issued) + token_ttl() + Duration::seconds(late);
        prop_assert_eq!(codec().verify(&token.value, now), Err(TokenError::Expired));
    }

    #[test]
    fn prop_byte_mutation_is_rejected(
        username in "[a-z]{1,16}",
        index in any::<prop::sample::Index>(),
        replacement in prop::sample::select(vec![b'A', b'z', b'0', b'-', b'_', b'.']),
    ) {
        let now = Utc::now();
        let token = codec().issue(&username, now).unwrap().value;

        let mut bytes = token.clone().into_bytes();
        let position = index.index(bytes.len());
        bytes[position] = replacement;
        let mutated = String::from_utf8(bytes).unwrap();
        prop_assume!(mutated != token);

        let result = codec().verify(&mutated, now);
        prop_assert!(
            matches!(result, Err(TokenError::InvalidSignature) | Err(TokenError::Malformed)),
            "mutation at {} gave {:?}", position, result
        );
    }
}
