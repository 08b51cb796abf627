//! Player UID validation

use thiserror::Error;

/// Errors for rejected player UIDs. Messages are surfaced verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerUidError {
    #[error("UID is required")]
    Missing,

    #[error("Invalid UID format")]
    InvalidFormat,
}

pub const MIN_UID_LENGTH: usize = 6;

/// Validate an already-trimmed player UID: non-empty, ASCII digits only,
/// at least six digits.
pub fn validate_uid(uid: &str) -> Result<(), PlayerUidError> {
    if uid.is_empty() {
        return Err(PlayerUidError::Missing);
    }

    if uid.len() < MIN_UID_LENGTH || !uid.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PlayerUidError::InvalidFormat);
    }

    Ok(())
}
