//! credauth - Credential Authentication Service
//!
//! A consolidated identity-credential service: signup, login, and
//! stateless token verification over a pluggable credential store.
//!
//! # Overview
//!
//! The service exposes a small JSON HTTP surface (axum) over one
//! `AuthService` that owns password hashing (bcrypt) and signed-token
//! issuance/verification (JWT). Persistence sits behind the
//! `CredentialStore` trait with two interchangeable backends, selected
//! by configuration at startup:
//!
//! - a SQLite database (sqlx connection pool)
//! - a flat JSON file rewritten atomically on every insert
//!
//! # Module Structure
//!
//! - **`auth`** - the service, hashing, tokens, and HTTP handlers
//! - **`store`** - the credential store trait and both backends
//! - **`error`** - the HTTP error taxonomy and conversions
//! - **`middleware`** - bearer-token middleware for protected routes
//! - **`routes`** - router assembly
//! - **`server`** - configuration, state, and application wiring
//!
//! # Example
//!
//! ```rust,no_run
//! use credauth::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Expected conditions (duplicate email, unknown email, wrong password,
//! missing/expired/invalid token) are explicit error variants mapped to
//! 400/401 responses. Store and hashing faults map to a generic 500;
//! their detail is logged server-side and never returned to clients.

/// Authentication service, hashing, tokens, handlers
pub mod auth;

/// HTTP error taxonomy
pub mod error;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration and wiring
pub mod server;

/// Credential store trait and backends
pub mod store;

pub use auth::AuthService;
pub use error::ApiError;
pub use server::{create_app, AppState};
pub use store::{CredentialRecord, CredentialStore, StoreError};
