/**
 * Router Configuration
 *
 * Assembles the full Axum router: the health probe plus the API route
 * table, with the shared application state applied last.
 */

use axum::{response::Json, Router};

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let router = Router::new().route("/health", axum::routing::get(health));
    let router = configure_api_routes(router, state.clone());

    router.with_state(state)
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
