//! File-backed user store

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::domain::DomainError;
use crate::domain::user::{UserRecord, UserStore};

/// On-disk document. The field name and nesting are a compatibility contract
/// shared with every other consumer of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    users: Vec<UserRecord>,
}

/// JSON-file-backed implementation of [`UserStore`].
///
/// Every read opens and parses the file anew and every save rewrites it
/// whole; there is no in-memory copy surviving between calls. Reads fail open
/// to an empty store: a missing file means "no users yet", and a corrupt file
/// is logged and treated the same way instead of taking requests down.
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn load_all(&self) -> Result<Vec<UserRecord>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "user store file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to read user store, treating as empty");
                return Ok(Vec::new());
            }
        };

        match serde_json::from_slice::<StoreDocument>(&bytes) {
            Ok(document) => Ok(document.users),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "user store is not valid JSON, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn save_all(&self, records: &[UserRecord]) -> Result<(), DomainError> {
        let document = StoreDocument {
            users: records.to_vec(),
        };

        let json = serde_json::to_vec_pretty(&document)
            .map_err(|e| DomainError::storage(format!("failed to serialize user store: {e}")))?;

        if let Err(e) = tokio::fs::write(&self.path, json).await {
            error!(path = %self.path.display(), error = %e, "failed to write user store");
            return Err(DomainError::storage(format!(
                "failed to write user store: {e}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileUserStore {
        JsonFileUserStore::new(dir.path().join("users.json"))
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let records = store.load_all().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let records = vec![
            UserRecord::new("ann", "hash-a"),
            UserRecord::new("bob", "hash-b"),
        ];

        store.save_all(&records).await.unwrap();
        let loaded = store.load_all().await.unwrap();

        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_save_of_loaded_store_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save_all(&[UserRecord::new("ann", "hash-a")])
            .await
            .unwrap();

        let first = store.load_all().await.unwrap();
        store.save_all(&first).await.unwrap();
        let second = store.load_all().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_insertion_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let names = ["carol", "ann", "bob"];
        let records: Vec<UserRecord> = names
            .iter()
            .map(|name| UserRecord::new(*name, "hash"))
            .collect();

        store.save_all(&records).await.unwrap();
        let loaded = store.load_all().await.unwrap();

        let loaded_names: Vec<&str> = loaded.iter().map(|r| r.username()).collect();
        assert_eq!(loaded_names, names);
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        tokio::fs::write(store.path(), b"{not json at all")
            .await
            .unwrap();

        let records = store.load_all().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_on_disk_document_shape() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save_all(&[UserRecord::new("ann", "hash-a")])
            .await
            .unwrap();

        let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["users"][0]["username"], "ann");
        assert_eq!(value["users"][0]["password_hash"], "hash-a");
        // Pretty-printed for hand inspection and diffing.
        assert!(raw.contains('\n'));
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // Point at a path whose parent directory does not exist.
        let store = JsonFileUserStore::new(dir.path().join("no-such-dir").join("users.json"));

        let result = store.save_all(&[UserRecord::new("ann", "hash")]).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_find_by_username_scans_fresh_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save_all(&[
                UserRecord::new("ann", "hash-a"),
                UserRecord::new("bob", "hash-b"),
            ])
            .await
            .unwrap();

        let found = store.find_by_username("bob").await.unwrap();
        assert_eq!(found.unwrap().password_hash(), "hash-b");

        assert!(store.find_by_username("carol").await.unwrap().is_none());
        // Case-sensitive: no normalization is performed.
        assert!(store.find_by_username("Bob").await.unwrap().is_none());
    }
}
