/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in identity. Extracts the
 * bearer token from the Authorization header, verifies it through the
 * auth service, and attaches the subject to request extensions.
 *
 * Verification is stateless (token + secret only); the credential
 * store is not consulted.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Bearer-token middleware
///
/// Returns 401 when the header is missing, not in `Bearer <token>`
/// form, or the token fails verification.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::authentication("No token provided")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::authentication("Invalid token")
    })?;

    let claims = state.auth.verify_token(Some(token))?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { email: claims.sub });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity.
///
/// Handlers behind [`auth_middleware`] take this as a parameter to get
/// the verified subject.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::authentication("No token provided")
            })?;

        Ok(AuthUser(user))
    }
}
