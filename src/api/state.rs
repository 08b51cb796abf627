//! Application state for shared services

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::player::PlayerApi;
use crate::domain::user::{SessionIdentity, UserRecord, UserStore};
use crate::infrastructure::auth::{AuthService, PasswordHasher};
use crate::infrastructure::session::SessionTokens;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub session_tokens: Arc<dyn SessionTokens>,
    pub player_api: Arc<dyn PlayerApi>,
    pub user_store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<dyn AuthServiceTrait>,
        session_tokens: Arc<dyn SessionTokens>,
        player_api: Arc<dyn PlayerApi>,
        user_store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            auth_service,
            session_tokens,
            player_api,
            user_store,
        }
    }
}

/// Trait for auth service operations
#[async_trait::async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionIdentity, DomainError>;

    async fn login(&self, username: &str, password: &str)
    -> Result<SessionIdentity, DomainError>;

    async fn get_user(&self, username: &str) -> Result<Option<UserRecord>, DomainError>;
}

#[async_trait::async_trait]
impl<S: UserStore + 'static, H: PasswordHasher + 'static> AuthServiceTrait for AuthService<S, H> {
    async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionIdentity, DomainError> {
        AuthService::register(self, username, password).await
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionIdentity, DomainError> {
        AuthService::login(self, username, password).await
    }

    async fn get_user(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
        AuthService::get_user(self, username).await
    }
}
