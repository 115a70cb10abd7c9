/**
 * SQLite Credential Store
 *
 * Database-backed implementation of the credential store. The pool is
 * opened once at startup and shared across all requests; the schema is
 * applied at connect time so a fresh database file is usable immediately.
 */

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::store::{CredentialRecord, CredentialStore, StoreError};

/// Email uniqueness lives in the schema: the primary key makes the
/// duplicate check part of the insert itself, so two concurrent signups
/// for the same email cannot both commit.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS credentials (
    email         TEXT PRIMARY KEY,
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL
)
"#;

/// SQLite-backed credential store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database and apply the schema.
    ///
    /// # Arguments
    /// * `url` - sqlx SQLite URL, e.g. `sqlite://credentials.db`
    ///
    /// # Returns
    /// Connected store, or the connection/schema error
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        tracing::info!("connected to credential database");
        Ok(Self { pool })
    }
}

#[async_trait]
impl CredentialStore for SqliteStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, StoreError> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            r#"
            SELECT email, password_hash, created_at
            FROM credentials
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn insert(&self, record: CredentialRecord) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO credentials (email, password_hash, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::DuplicateEmail)
            }
            Err(e) => Err(StoreError::Database(e)),
        }
    }
}
