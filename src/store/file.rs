/**
 * File Credential Store
 *
 * File-backed implementation of the credential store. The whole
 * collection is one JSON array of records; every insert rewrites the
 * document in full (serialize to a sibling temp file, then rename over
 * the target), so readers never observe a partial write.
 *
 * A missing or empty file reads as zero records, which makes first
 * startup against a fresh path work without any setup step.
 */

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::store::{CredentialRecord, CredentialStore, StoreError};

/// JSON-file-backed credential store.
///
/// The write lock serializes the read-modify-write cycle, so the
/// duplicate check inside `insert` holds under concurrent signups.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store over the given file path.
    ///
    /// The file does not need to exist yet; it is created on the first
    /// insert.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read the full record collection from disk.
    async fn load(&self) -> Result<Vec<CredentialRecord>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically replace the document with the given records.
    async fn rewrite(&self, records: &[CredentialRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records)?;
        let tmp = tmp_path(&self.path);
        tokio::fs::write(&tmp, &json).await?;
        // Same-directory rename, so the swap is atomic.
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

/// Sibling path used for the staged write (`credentials.json.tmp`).
fn tmp_path(path: &Path) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, StoreError> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|r| r.email == email))
    }

    async fn insert(&self, record: CredentialRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        if records.iter().any(|r| r.email == record.email) {
            return Err(StoreError::DuplicateEmail);
        }

        records.push(record);
        self.rewrite(&records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(email: &str) -> CredentialRecord {
        CredentialRecord {
            email: email.to_string(),
            password_hash: "$2b$12$fakefakefakefakefakefake".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("credentials.json"));

        let found = store.find_by_email("a@x.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        tokio::fs::write(&path, b"").await.unwrap();

        let store = FileStore::new(&path);
        assert!(store.find_by_email("a@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("credentials.json"));

        store.insert(record("a@x.com")).await.unwrap();

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("credentials.json"));

        store.insert(record("a@x.com")).await.unwrap();
        let result = store.insert(record("a@x.com")).await;

        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");

        {
            let store = FileStore::new(&path);
            store.insert(record("a@x.com")).await.unwrap();
            store.insert(record("b@x.com")).await.unwrap();
        }

        let store = FileStore::new(&path);
        assert!(store.find_by_email("a@x.com").await.unwrap().is_some());
        assert!(store.find_by_email("b@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_document_is_a_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");

        let store = FileStore::new(&path);
        store.insert(record("a@x.com")).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_array());
        assert_eq!(parsed[0]["email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");

        let store = FileStore::new(&path);
        store.insert(record("a@x.com")).await.unwrap();

        assert!(!tmp_path(&path).exists());
    }
}
