/**
 * Server Initialization
 *
 * Builds the application from a resolved configuration: construct the
 * selected credential store, wire up the auth service, and return the
 * configured router.
 *
 * # Initialization Steps
 *
 * 1. Construct the store backend named by the configuration
 * 2. Build the token issuer from the JWT settings
 * 3. Create the `AuthService` with both injected
 * 4. Assemble the router around the shared state
 *
 * Unlike a config load, a store that cannot be opened is fatal here:
 * the service is useless without it, so the error propagates out and
 * the process exits instead of limping along degraded.
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::{AuthService, TokenIssuer};
use crate::routes::create_router;
use crate::server::config::{ServerConfig, StoreBackend};
use crate::server::state::AppState;
use crate::store::{CredentialStore, FileStore, SqliteStore, StoreError};

/// Create and configure the Axum application
///
/// # Arguments
/// * `config` - resolved server configuration
///
/// # Returns
/// Configured router, or the store connection error
pub async fn create_app(config: &ServerConfig) -> Result<Router, StoreError> {
    let store: Arc<dyn CredentialStore> = match &config.store {
        StoreBackend::Database { url } => {
            tracing::info!("using database-backed credential store");
            Arc::new(SqliteStore::connect(url).await?)
        }
        StoreBackend::File { path } => {
            tracing::info!("using file-backed credential store: {}", path.display());
            Arc::new(FileStore::new(path.clone()))
        }
    };

    let tokens = TokenIssuer::new(
        config.jwt_secret.clone(),
        config.jwt_algorithm,
        config.token_ttl,
    );
    let auth = AuthService::new(store, tokens);

    Ok(create_router(AppState { auth }))
}
