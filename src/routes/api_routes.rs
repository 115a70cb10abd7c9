/**
 * API Route Handlers
 *
 * Route table for the authentication API.
 *
 * # Routes
 *
 * - `POST /api/signup` - register a new identity (public)
 * - `POST /api/login` - authenticate, returns a bearer token (public)
 * - `POST /api/verify-token` - check a token standalone (public)
 * - `GET /api/me` - current identity (requires bearer token)
 */

use axum::{middleware, Router};

use crate::auth::handlers::{get_me, login, signup, verify_token};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure API routes
///
/// The `/api/me` route carries the bearer middleware; the other routes
/// are public by design (they are how a client obtains a token in the
/// first place).
pub fn configure_api_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router
        .route("/api/signup", axum::routing::post(signup))
        .route("/api/login", axum::routing::post(login))
        .route("/api/verify-token", axum::routing::post(verify_token))
        .route(
            "/api/me",
            axum::routing::get(get_me)
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}
