/**
 * Verify-Token Handler
 *
 * Implements POST /api/verify-token. Verification is stateless: the
 * token is checked against the shared secret only, with no store
 * access.
 *
 * # Example Request
 *
 * ```http
 * POST /api/verify-token HTTP/1.1
 * Content-Type: application/json
 *
 * {"token": "eyJhbGciOiJIUzI1NiIs..."}
 * ```
 *
 * # Example Response
 *
 * ```json
 * {"valid": true, "email": "a@x.com"}
 * ```
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{VerifyTokenRequest, VerifyTokenResponse};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Verify-token handler
///
/// # Errors
///
/// * `401 Unauthorized` - token missing, expired, or invalid
pub async fn verify_token(
    State(state): State<AppState>,
    Json(request): Json<VerifyTokenRequest>,
) -> Result<Json<VerifyTokenResponse>, ApiError> {
    let claims = state.auth.verify_token(request.token.as_deref())?;

    Ok(Json(VerifyTokenResponse {
        valid: true,
        email: claims.sub,
    }))
}
