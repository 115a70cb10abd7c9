/**
 * Login Handler
 *
 * Implements POST /api/login.
 *
 * # Example Request
 *
 * ```http
 * POST /api/login HTTP/1.1
 * Content-Type: application/json
 *
 * {
 *   "email": "a@x.com",
 *   "password": "pw1"
 * }
 * ```
 *
 * # Example Response
 *
 * ```json
 * {
 *   "success": true,
 *   "email": "a@x.com",
 *   "access_token": "eyJhbGciOiJIUzI1NiIs...",
 *   "token_type": "bearer"
 * }
 * ```
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store, hashing, or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let issued = state.auth.login(&request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        success: true,
        email: issued.email,
        access_token: issued.access_token,
        token_type: issued.token_type,
    }))
}
