/**
 * Auth Service
 *
 * The consolidated identity-credential service: signup, login, and
 * token verification over an injected credential store. This is the
 * one place the hashing, token, and store pieces meet; the HTTP layer
 * above it is a thin JSON adapter.
 *
 * # Error Design
 *
 * Expected conditions (missing fields, duplicate email, unknown email,
 * wrong password, bad token) are enum variants returned to the caller.
 * Store and hashing faults are carried as separate variants and mapped
 * to a generic 500 at the HTTP boundary; their detail is logged here,
 * never sent to clients.
 */

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::auth::password::{hash_password, verify_password, PasswordError};
use crate::auth::tokens::{TokenClaims, TokenError, TokenIssuer};
use crate::store::{CredentialRecord, CredentialStore, StoreError};

/// Signup failure.
#[derive(Debug, Error)]
pub enum SignupError {
    /// Email or password was empty
    #[error("email and password are required")]
    MissingFields,

    /// A record with this email already exists
    #[error("email already registered")]
    EmailExists,

    /// Store failure other than the duplicate check
    #[error(transparent)]
    Store(StoreError),

    /// Password hashing failure
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Login failure.
#[derive(Debug, Error)]
pub enum LoginError {
    /// No record for this email
    #[error("email not found")]
    EmailNotFound,

    /// Password did not match the stored hash
    #[error("invalid password")]
    InvalidPassword,

    /// Store failure during lookup
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password verification failure
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Token could not be encoded
    #[error("token issuance failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Token verification failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// No token supplied
    #[error("no token provided")]
    Missing,

    /// Signature valid but past expiry
    #[error("token expired")]
    Expired,

    /// Bad signature or malformed token
    #[error("invalid token")]
    Invalid,
}

/// Successful login result: the minted bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub email: String,
    pub access_token: String,
    pub token_type: String,
}

/// Identity lifecycle and token management.
///
/// Constructed once at startup with an explicit store handle and token
/// issuer, then shared by the HTTP state. Cheap to clone.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }

    /// Register a new identity.
    ///
    /// Inputs must be non-empty; there is no other validation (no email
    /// format check, no password policy). On success the record is
    /// stored with a fresh salted hash and the current timestamp. No
    /// token is returned; signup does not log the user in.
    pub async fn signup(&self, email: &str, password: &str) -> Result<(), SignupError> {
        if email.is_empty() || password.is_empty() {
            tracing::warn!("signup rejected: missing fields");
            return Err(SignupError::MissingFields);
        }

        tracing::info!("signup request for: {}", email);

        let password_hash = hash_password(password).await?;
        let record = CredentialRecord {
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        match self.store.insert(record).await {
            Ok(()) => {
                tracing::info!("identity created: {}", email);
                Ok(())
            }
            Err(StoreError::DuplicateEmail) => {
                tracing::warn!("signup rejected, email exists: {}", email);
                Err(SignupError::EmailExists)
            }
            Err(e) => {
                tracing::error!("signup store failure for {}: {}", email, e);
                Err(SignupError::Store(e))
            }
        }
    }

    /// Authenticate and mint a bearer token.
    ///
    /// The token carries `sub` = the stored email and expires after the
    /// configured TTL.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, LoginError> {
        tracing::info!("login request for: {}", email);

        let record = self
            .store
            .find_by_email(email)
            .await
            .map_err(|e| {
                tracing::error!("login store failure for {}: {}", email, e);
                LoginError::Store(e)
            })?
            .ok_or_else(|| {
                tracing::warn!("login rejected, email not found: {}", email);
                LoginError::EmailNotFound
            })?;

        if !verify_password(password, &record.password_hash).await? {
            tracing::warn!("login rejected, invalid password for: {}", email);
            return Err(LoginError::InvalidPassword);
        }

        let access_token = self.tokens.issue(&record.email)?;
        tracing::info!("login succeeded for: {}", email);

        Ok(IssuedToken {
            email: record.email,
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Verify a presented token and return its claims.
    ///
    /// Pure function of token + secret; the store is never consulted.
    pub fn verify_token(&self, token: Option<&str>) -> Result<TokenClaims, VerifyError> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => {
                tracing::warn!("verify rejected: no token provided");
                return Err(VerifyError::Missing);
            }
        };

        self.tokens.verify(token).map_err(|e| {
            let kind = match e {
                TokenError::Expired => VerifyError::Expired,
                TokenError::Invalid => VerifyError::Invalid,
            };
            tracing::warn!("verify rejected: {}", kind);
            kind
        })
    }
}
