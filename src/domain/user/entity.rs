//! User records and session identity

use serde::{Deserialize, Serialize};

/// One registered account as persisted in the user store.
///
/// The serialized field names are a compatibility contract with the on-disk
/// store document: `{ "users": [ { "username": ..., "password_hash": ... } ] }`.
/// Both fields are immutable after registration; only the store as a whole is
/// ever rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Login name, unique across the store. Case-sensitive, no normalization.
    username: String,
    /// Salted Argon2 hash of the password. The plaintext is never persisted.
    password_hash: String,
}

impl UserRecord {
    /// Create a record from an already-hashed password
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// The authenticated username bound to one client for the duration of a
/// session. Created at successful login or registration, destroyed when the
/// client discards its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    username: String,
}

impl SessionIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Display for SessionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
