/**
 * Server Configuration
 *
 * Loads and validates server configuration from the environment, once,
 * at startup. The result is an explicit `ServerConfig` value handed to
 * `create_app`; nothing reads the environment after this point.
 *
 * # Variables
 *
 * - `JWT_SECRET` - token signing secret. Required; startup fails
 *   without it. There is deliberately no built-in fallback secret.
 * - `JWT_ALGORITHM` - signature algorithm (default `HS256`)
 * - `JWT_ACCESS_TOKEN_EXPIRE_MINUTES` - token TTL (default `30`)
 * - `AUTH_STORE` - `database` (default) or `file`
 * - `DATABASE_URL` - required for the database backend
 * - `CREDENTIALS_FILE` - file backend path (default `credentials.json`)
 * - `SERVER_PORT` - listen port (default `5000`)
 */

use std::path::PathBuf;
use std::time::Duration;

use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Configuration failure at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingJwtSecret,

    #[error("JWT_ALGORITHM is not a recognized algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("DATABASE_URL must be set when AUTH_STORE=database")]
    MissingDatabaseUrl,

    #[error("AUTH_STORE must be 'database' or 'file', got: {0}")]
    UnknownBackend(String),
}

/// Which credential store backend to construct.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// sqlx-backed store at the given URL
    Database { url: String },
    /// JSON-file-backed store at the given path
    File { path: PathBuf },
}

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub token_ttl: Duration,
    pub store: StoreBackend,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails when `JWT_SECRET` is missing or empty, when a numeric or
    /// algorithm value does not parse, or when the selected store
    /// backend is missing its connection setting.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => return Err(ConfigError::MissingJwtSecret),
        };

        let algorithm_name =
            std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string());
        let jwt_algorithm = algorithm_name
            .parse::<Algorithm>()
            .map_err(|_| ConfigError::InvalidAlgorithm(algorithm_name))?;

        let ttl_minutes = std::env::var("JWT_ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string());
        let ttl_minutes: u64 = ttl_minutes.parse().map_err(|_| ConfigError::InvalidNumber {
            name: "JWT_ACCESS_TOKEN_EXPIRE_MINUTES",
            value: ttl_minutes.clone(),
        })?;

        let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "5000".to_string());
        let port: u16 = port.parse().map_err(|_| ConfigError::InvalidNumber {
            name: "SERVER_PORT",
            value: port.clone(),
        })?;

        let backend = std::env::var("AUTH_STORE").unwrap_or_else(|_| "database".to_string());
        let store = match backend.as_str() {
            "database" => {
                let url =
                    std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;
                StoreBackend::Database { url }
            }
            "file" => {
                let path = std::env::var("CREDENTIALS_FILE")
                    .unwrap_or_else(|_| "credentials.json".to_string());
                StoreBackend::File {
                    path: PathBuf::from(path),
                }
            }
            other => return Err(ConfigError::UnknownBackend(other.to_string())),
        };

        Ok(Self {
            port,
            jwt_secret,
            jwt_algorithm,
            token_ttl: Duration::from_secs(ttl_minutes * 60),
            store,
        })
    }
}
