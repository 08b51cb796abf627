//! Session token issuing and verification

pub mod token;

pub use token::{SessionClaims, SessionTokenConfig, SessionTokenService, SessionTokens};
