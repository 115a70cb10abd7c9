/**
 * Token Issuance and Verification
 *
 * This module handles JWT generation and validation. Tokens are
 * stateless: verification is a pure function of the token and the
 * shared secret, with no store access.
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the email the token was issued for
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Why a token failed verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature valid but the expiry has passed
    #[error("token expired")]
    Expired,
    /// Bad signature, wrong secret, or malformed structure
    #[error("invalid token")]
    Invalid,
}

/// Mints and verifies signed tokens.
///
/// Built once from configuration and shared by value; the secret,
/// algorithm, and TTL never change over the process lifetime.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, algorithm: Algorithm, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            algorithm,
            ttl,
        }
    }

    /// Issue a token for the given email.
    ///
    /// Claims carry `sub` = email, `iat` = now, `exp` = now + TTL.
    pub fn issue(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(email, unix_now())
    }

    /// Issue against an explicit clock. Tests use this to mint
    /// already-expired tokens without sleeping.
    pub(crate) fn issue_at(
        &self,
        email: &str,
        now: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = TokenClaims {
            sub: email.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs(),
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::new(self.algorithm), &claims, &key)
    }

    /// Verify and decode a token.
    ///
    /// Zero clock leeway: a token is `Expired` exactly once now >= exp.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        match decode::<TokenClaims>(token, &key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Err(TokenError::Expired),
            Err(_) => Err(TokenError::Invalid),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
