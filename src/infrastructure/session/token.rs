//! Signed session tokens
//!
//! A session is one signed token holding the authenticated username. The
//! platform guarantees integrity via the HS256 signature; "logging out" is
//! the client discarding its token, so the server keeps no session state.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;
use crate::domain::user::SessionIdentity;

/// Claims carried inside a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (the authenticated username)
    pub sub: String,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(identity: &SessionIdentity, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: identity.username().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    pub fn username(&self) -> &str {
        &self.sub
    }

    pub fn identity(&self) -> SessionIdentity {
        SessionIdentity::new(&self.sub)
    }
}

/// Configuration for the session token service
#[derive(Debug, Clone)]
pub struct SessionTokenConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token lifetime in hours
    pub expiration_hours: u64,
}

impl SessionTokenConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

/// Trait for issuing and verifying session tokens
pub trait SessionTokens: Send + Sync + Debug {
    /// Sign a token for an authenticated identity
    fn issue(&self, identity: &SessionIdentity) -> Result<String, DomainError>;

    /// Verify a token's signature and expiry, returning its claims
    fn verify(&self, token: &str) -> Result<SessionClaims, DomainError>;

    /// Token lifetime in hours
    fn expiration_hours(&self) -> u64;
}

/// HS256 session token service
#[derive(Clone)]
pub struct SessionTokenService {
    config: SessionTokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for SessionTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("expiration_hours", &self.config.expiration_hours)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl SessionTokenService {
    pub fn new(config: SessionTokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl SessionTokens for SessionTokenService {
    fn issue(&self, identity: &SessionIdentity) -> Result<String, DomainError> {
        let claims = SessionClaims::new(identity, self.config.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("failed to sign session token: {e}")))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| DomainError::credential("Invalid or expired session"))?;

        Ok(data.claims)
    }

    fn expiration_hours(&self) -> u64 {
        self.config.expiration_hours
    }
}
