/**
 * API Error Types
 *
 * The error taxonomy exposed at the HTTP boundary. Every handler
 * failure is one of four categories:
 *
 * - `Validation` - missing or malformed input (400)
 * - `Conflict`   - duplicate email (400)
 * - `Authentication` - unknown email, bad password, bad token (401)
 * - `Internal`   - store or hashing fault (500)
 *
 * `Internal` deliberately carries no detail: the underlying cause is
 * logged where it happens, and clients only ever see a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// HTTP-boundary error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Duplicate email on signup
    #[error("{0}")]
    Conflict(String),

    /// Failed credential or token check
    #[error("{0}")]
    Authentication(String),

    /// Unexpected fault; detail stays server-side
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing error message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
