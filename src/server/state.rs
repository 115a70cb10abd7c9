/**
 * Application State
 *
 * The state shared across all request handlers. It holds the one
 * constructed `AuthService` (which owns the store handle and the token
 * issuer); handlers and middleware reach everything through it.
 *
 * The store connection is opened once at startup and lives inside the
 * service; there is no ambient or per-request connection state.
 */

use crate::auth::AuthService;

/// Shared application state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
}
