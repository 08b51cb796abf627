//! Player identifiers and the upstream stats provider trait

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use super::validation::{PlayerUidError, validate_uid};
use crate::domain::DomainError;

/// A validated player UID: digits only, at least six of them.
///
/// Construction trims surrounding whitespace before validating, matching what
/// clients tend to paste into the UID field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUid(String);

impl PlayerUid {
    pub fn new(uid: impl AsRef<str>) -> Result<Self, PlayerUidError> {
        let uid = uid.as_ref().trim();
        validate_uid(uid)?;
        Ok(Self(uid.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Upstream player-statistics APIs.
///
/// Both operations are pass-throughs: the upstream response body is returned
/// as raw JSON, with upstream failures normalized into [`DomainError`]
/// variants (404 -> not found, 429 -> rate limited, anything else -> upstream).
#[async_trait]
pub trait PlayerApi: Send + Sync + Debug {
    /// Fetch the public profile for a player.
    async fn view_profile(&self, uid: &PlayerUid) -> Result<Value, DomainError>;

    /// Send a like to a player.
    async fn send_like(&self, uid: &PlayerUid) -> Result<Value, DomainError>;
}
