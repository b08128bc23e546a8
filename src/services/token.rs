//! Bearer token issuing and verification.
//!
//! Symmetric-key HS256 tokens carrying a typed claims structure. The
//! algorithm is pinned at construction; a token whose header names any other
//! algorithm fails verification, which closes off algorithm-substitution
//! attacks. Verification is pure: no storage, no network, no shared state.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried inside a token.
///
/// All fields are required when a token is issued; verification rejects
/// tokens that are missing any of them rather than filling in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity (user id)
    pub sub: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Why a token was rejected. Callers collapse these into one generic
/// response; the distinction exists for server-side diagnostics.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("token signature verification failed")]
    BadSignature,

    #[error("token expired")]
    Expired,

    #[error("subject claim missing, empty, or not a string")]
    MissingSubject,

    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Loosely-typed view of an incoming token's claims. Decoded first, then
/// validated field by field so each defect maps to its own [`TokenError`].
#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    sub: Option<serde_json::Value>,
    #[serde(default)]
    exp: Option<serde_json::Value>,
    #[serde(default)]
    iat: Option<i64>,
}

/// Token issuer and verifier over a single symmetric key.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenCodec {
    /// Build a codec from the configured signing secret and token lifetime.
    pub fn new(secret: &[u8], lifetime_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry and subject are checked manually below so each rejection
        // keeps its own kind.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            lifetime: Duration::hours(lifetime_hours),
        }
    }

    /// Issue a signed token for the given subject, expiring after the
    /// configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify a token string and return its claims.
    ///
    /// Rejection paths, in order: undecodable token or claims
    /// ([`TokenError::Malformed`]), wrong algorithm or signature
    /// ([`TokenError::BadSignature`]), bad subject
    /// ([`TokenError::MissingSubject`]), missing or elapsed expiry
    /// ([`TokenError::Expired`]).
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data =
            decode::<RawClaims>(token, &self.decoding, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                        TokenError::BadSignature
                    }
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed,
                }
            })?;
        let raw = data.claims;

        let sub = match raw.sub.as_ref().and_then(|v| v.as_str()) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => return Err(TokenError::MissingSubject),
        };

        let exp = raw
            .exp
            .as_ref()
            .and_then(|v| v.as_i64())
            .ok_or(TokenError::Expired)?;
        if exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        // We never issue tokens without iat; one that lacks it is not ours.
        let iat = raw.iat.ok_or(TokenError::Malformed)?;

        Ok(Claims { sub, iat, exp })
    }
}
