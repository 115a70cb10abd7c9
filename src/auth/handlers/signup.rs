/**
 * Signup Handler
 *
 * Implements POST /api/signup.
 *
 * # Example Request
 *
 * ```http
 * POST /api/signup HTTP/1.1
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
 * {"success": true}
 * ```
 *
 * No token is returned; signup does not log the user in.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Signup handler
///
/// # Errors
///
/// * `400 Bad Request` - empty email/password or email already registered
/// * `500 Internal Server Error` - store or hashing failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    state.auth.signup(&request.email, &request.password).await?;
    Ok(Json(SignupResponse { success: true }))
}
