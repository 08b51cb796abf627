//! User store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::UserRecord;
use crate::domain::DomainError;

/// Repository trait for the durable collection of user records.
///
/// The store is an ordered sequence; insertion order is registration order.
/// Implementations read the durable copy fresh on every call and never cache
/// it between requests.
#[async_trait]
pub trait UserStore: Send + Sync + Debug {
    /// Read the entire store.
    ///
    /// A store that does not exist yet, or whose durable copy cannot be read
    /// or parsed, yields an empty sequence rather than an error. Read
    /// failures are logged by the implementation.
    async fn load_all(&self) -> Result<Vec<UserRecord>, DomainError>;

    /// Overwrite the entire durable store with `records`.
    ///
    /// Write failures are logged by the implementation and returned as a
    /// storage error so callers can report that persistence failed.
    async fn save_all(&self, records: &[UserRecord]) -> Result<(), DomainError>;

    /// Exact, case-sensitive username lookup.
    ///
    /// Loads the full store and scans linearly. O(n) per call; fine for the
    /// small datasets this store is meant for.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .find(|record| record.username() == username))
    }
}
