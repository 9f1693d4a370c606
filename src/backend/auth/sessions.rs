/**
 * Session Tokens
 *
 * This module issues and verifies the signed, self-contained tokens that
 * carry a user's session. Tokens are HS256 JWTs holding the username and an
 * expiry five minutes after issue.
 *
 * Verification is driven by the caller's clock: the library's own wall-clock
 * expiry check is turned off and `exp` is compared against the `now` passed in.
 */

use chrono::{DateTime, Duration, SubsecRound, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::TokenError;

/// Lifetime of every issued token, in seconds
pub const TOKEN_TTL_SECS: i64 = 5 * 60;

/// Lifetime of every issued token
pub fn token_ttl() -> Duration {
    Duration::seconds(TOKEN_TTL_SECS)
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated username
    pub username: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

/// A freshly issued token and the instant it stops being valid
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies session tokens with a process-wide secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Create a token for `username` expiring `token_ttl()` after `now`
    ///
    /// `exp` has whole-second precision, so `now` is truncated first and the
    /// returned `expires_at` is exactly the instant the token is rejected.
    pub fn issue(&self, username: &str, now: DateTime<Utc>) -> Result<SessionToken, TokenError> {
        let expires_at = now.trunc_subsecs(0) + token_ttl();
        let claims = Claims {
            username: username.to_string(),
            exp: expires_at.timestamp(),
        };

        let value = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(SessionToken { value, expires_at })
    }

    /// Verify a token and return the decoded claims
    ///
    /// # Errors
    ///
    /// * `Malformed` - not a decodable HS256 token with our claims
    /// * `InvalidSignature` - payload was not signed with our secret
    /// * `Expired` - `exp <= now`
    pub fn decode_claims(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        let claims = data.claims;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Verify a token and return the username it was issued for
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        self.decode_claims(token, now).map(|claims| claims.username)
    }
}

impl Claims {
    /// Expiry as a timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}
