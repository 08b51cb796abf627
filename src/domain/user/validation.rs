//! Credential validation rules for registration and login

use thiserror::Error;

/// Errors surfaced to the user when submitted credentials are rejected.
///
/// Messages are shown verbatim as corrective feedback, so they carry no
/// technical prefix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Username must be at least {0} characters")]
    UsernameTooShort(usize),

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate credentials for registration. The username is expected to be
/// whitespace-trimmed by the caller.
///
/// Checks run in a fixed order and the first failing rule wins:
/// 1. both fields non-empty
/// 2. username length >= 3
/// 3. password length >= 6
///
/// There are deliberately no character-set or maximum-length rules: existing
/// stores may contain usernames with arbitrary characters, and tightening the
/// rules here would lock those accounts out of duplicate detection.
pub fn validate_registration(username: &str, password: &str) -> Result<(), CredentialsError> {
    validate_presence(username, password)?;

    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(CredentialsError::UsernameTooShort(MIN_USERNAME_LENGTH));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CredentialsError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Validate that both credential fields are present. Login applies only this
/// check; everything beyond it is a credential match, not validation.
pub fn validate_presence(username: &str, password: &str) -> Result<(), CredentialsError> {
    if username.is_empty() || password.is_empty() {
        return Err(CredentialsError::MissingFields);
    }

    Ok(())
}
