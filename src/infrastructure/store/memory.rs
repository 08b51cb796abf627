//! In-memory user store implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::user::{UserRecord, UserStore};

/// In-memory implementation of [`UserStore`].
///
/// Keeps the same ordered-sequence semantics as the file-backed store.
/// Used by tests and available for ephemeral deployments where the user list
/// does not need to survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: Arc<RwLock<Vec<UserRecord>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing records
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn load_all(&self) -> Result<Vec<UserRecord>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn save_all(&self, records: &[UserRecord]) -> Result<(), DomainError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
