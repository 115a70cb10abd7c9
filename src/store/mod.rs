//! Credential Store Module
//!
//! This module owns the durable mapping from email to identity record.
//! The store is abstracted behind the [`CredentialStore`] trait so the
//! auth service works identically against either backend:
//!
//! - **`database`** - SQLite-backed store (sqlx connection pool)
//! - **`file`** - flat JSON file rewritten atomically on every insert
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - Record type, error type, store trait
//! ├── database.rs - SQLite implementation
//! └── file.rs     - JSON file implementation
//! ```
//!
//! # Uniqueness
//!
//! At most one record exists per email at any time. Both implementations
//! enforce this inside `insert` itself (primary key for the database,
//! a write lock around the read-modify-write for the file), so concurrent
//! signups for the same email cannot both succeed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SQLite-backed store
pub mod database;

/// JSON-file-backed store
pub mod file;

pub use database::SqliteStore;
pub use file::FileStore;

/// One registered identity.
///
/// Records are created by signup, never updated and never deleted.
/// The email is the primary identifier and is stored exactly as
/// received (no case folding, no trimming).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CredentialRecord {
    /// Email address, unique across the store
    pub email: String,
    /// bcrypt hash of the password (salt embedded)
    pub password_hash: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Errors surfaced by credential store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this email already exists
    #[error("email already registered")]
    DuplicateEmail,

    /// Database query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// File store could not be read or written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// File store contents could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable mapping from email to identity record.
///
/// Implementations must be safe to share across concurrent requests;
/// the handle is created once at startup and reused.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a record by email.
    ///
    /// No side effects. Returns `None` if the email is not registered.
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, StoreError>;

    /// Insert a new record.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if a record with the
    /// same email already exists. The duplicate check and the insert are
    /// atomic with respect to other calls on the same store.
    async fn insert(&self, record: CredentialRecord) -> Result<(), StoreError>;
}
