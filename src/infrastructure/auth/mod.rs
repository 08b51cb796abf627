//! Authentication: password hashing and the register/login service

pub mod password;
pub mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{AuthService, INVALID_CREDENTIALS, USERNAME_TAKEN};
