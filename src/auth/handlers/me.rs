/**
 * Current Identity Handler
 *
 * Implements GET /api/me, the one bearer-protected route. The auth
 * middleware has already verified the token and attached the subject;
 * this handler only echoes it back.
 */

use axum::response::Json;

use crate::auth::handlers::types::MeResponse;
use crate::middleware::auth::AuthUser;

/// Current identity handler
///
/// Requires a valid `Authorization: Bearer <token>` header; the
/// middleware rejects the request with 401 before this runs otherwise.
pub async fn get_me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    Json(MeResponse { email: user.email })
}
