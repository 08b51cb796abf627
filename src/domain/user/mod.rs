//! User records, the store trait, and credential validation

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{SessionIdentity, UserRecord};
pub use repository::UserStore;
pub use validation::{
    CredentialsError, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, validate_presence,
    validate_registration,
};
