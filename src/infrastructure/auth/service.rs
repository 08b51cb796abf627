//! Registration and login rules over the user store

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use super::password::PasswordHasher;
use crate::domain::DomainError;
use crate::domain::user::{
    SessionIdentity, UserRecord, UserStore, validate_presence, validate_registration,
};

/// The one message returned for every failed login lookup or password
/// mismatch. Unknown usernames and wrong passwords must stay textually
/// indistinguishable so responses cannot be used to enumerate accounts.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Try again!";

/// Message for a registration against an already-taken username.
pub const USERNAME_TAKEN: &str = "Username already exists";

/// Registration and login built on a [`UserStore`] and a [`PasswordHasher`].
#[derive(Debug)]
pub struct AuthService<S: UserStore, H: PasswordHasher> {
    store: Arc<S>,
    hasher: Arc<H>,
    /// Serializes register's check-then-append-then-persist sequence.
    /// Without it, two concurrent registrations can interleave their
    /// load/append/save and the later save silently drops the earlier user.
    write_lock: Mutex<()>,
}

impl<S: UserStore, H: PasswordHasher> AuthService<S, H> {
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self {
            store,
            hasher,
            write_lock: Mutex::new(()),
        }
    }

    /// Register a new account and return the session identity for it.
    ///
    /// The username is trimmed before any checks. Validation runs in a fixed
    /// order (missing fields, username length, password length, duplicate
    /// username) and the first failure is returned. A persistence failure is
    /// propagated as a storage error; there is no rollback, so a failed write
    /// leaves the durable store as it was.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionIdentity, DomainError> {
        let username = username.trim();

        validate_registration(username, password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let _guard = self.write_lock.lock().await;

        if self.store.find_by_username(username).await?.is_some() {
            return Err(DomainError::conflict(USERNAME_TAKEN));
        }

        let password_hash = self.hasher.hash(password)?;

        let mut records = self.store.load_all().await?;
        records.push(UserRecord::new(username, password_hash));
        self.store.save_all(&records).await?;

        info!(username, "registered new user");
        Ok(SessionIdentity::new(username))
    }

    /// Authenticate a username/password pair.
    ///
    /// Empty fields are a validation error; everything else that goes wrong
    /// (unknown user, wrong password) produces the same generic credential
    /// failure.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionIdentity, DomainError> {
        let username = username.trim();

        validate_presence(username, password).map_err(|e| DomainError::validation(e.to_string()))?;

        let Some(user) = self.store.find_by_username(username).await? else {
            return Err(DomainError::credential(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Err(DomainError::credential(INVALID_CREDENTIALS));
        }

        info!(username, "user logged in");
        Ok(SessionIdentity::new(user.username()))
    }

    /// Look up a registered user by exact username.
    pub async fn get_user(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
        self.store.find_by_username(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::repository::mock::MockUserStore;
    use crate::infrastructure::auth::password::Argon2Hasher;
    use crate::infrastructure::store::InMemoryUserStore;

    fn service_with(store: Arc<InMemoryUserStore>) -> AuthService<InMemoryUserStore, Argon2Hasher> {
        AuthService::new(store, Arc::new(Argon2Hasher::new()))
    }

    fn empty_service() -> AuthService<InMemoryUserStore, Argon2Hasher> {
        service_with(Arc::new(InMemoryUserStore::new()))
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = empty_service();

        service.register("ann", "secret1").await.unwrap();

        let identity = service.login("ann", "secret1").await.unwrap();
        assert_eq!(identity.username(), "ann");
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store.clone());

        service.register("ann", "secret1").await.unwrap();

        let records = store.load_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].username(), "ann");
        assert_ne!(records[0].password_hash(), "secret1");

        let hasher = Argon2Hasher::new();
        assert!(hasher.verify("secret1", records[0].password_hash()));
    }

    #[tokio::test]
    async fn test_register_trims_username() {
        let service = empty_service();

        service.register("  ann  ", "secret1").await.unwrap();

        let user = service.get_user("ann").await.unwrap();
        assert!(user.is_some());
    }

    #[tokio::test]
    async fn test_register_validation_order() {
        let service = empty_service();

        // A whitespace-only username counts as missing, not as too short.
        let err = service.register("   ", "secret1").await.unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Please fill in all fields");

        let err = service.register("ab", "12345").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Username must be at least 3 characters"
        );

        let err = service.register("ann", "12345").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Password must be at least 6 characters"
        );
    }

    #[tokio::test]
    async fn test_register_boundary_lengths_succeed() {
        let service = empty_service();

        // username length 3, password length 6: both at the minimum
        service.register("abc", "123456").await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected_and_store_unchanged() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store.clone());

        service.register("ann", "secret1").await.unwrap();
        let before = store.load_all().await.unwrap();

        let err = service.register("ann", "other-password").await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));

        let after = store.load_all().await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let service = empty_service();

        service.register("ann", "secret1").await.unwrap();
        // Different case is a different account, not a duplicate.
        service.register("Ann", "secret1").await.unwrap();

        assert!(service.login("Ann", "secret1").await.is_ok());
        assert!(service.login("ann", "secret1").await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store.clone());

        service.register("bob", "secret1").await.unwrap();
        let before = store.load_all().await.unwrap();

        let wrong_password = service.login("bob", "wrongpw").await.unwrap_err();
        let unknown_user = service.login("nobody", "wrongpw").await.unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.to_string(), INVALID_CREDENTIALS);

        // A failed login never mutates the store.
        assert_eq!(store.load_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_login_rejects_empty_fields() {
        let service = empty_service();

        let err = service.login("", "secret1").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let err = service.login("ann", "").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_registration_order_is_preserved() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store.clone());

        for name in ["carol", "ann", "bob"] {
            service.register(name, "secret1").await.unwrap();
        }

        let names: Vec<String> = store
            .load_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.username().to_string())
            .collect();

        assert_eq!(names, ["carol", "ann", "bob"]);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_reported() {
        let store = Arc::new(MockUserStore::new());
        let service = AuthService::new(store.clone(), Arc::new(Argon2Hasher::new()));

        store.set_fail_saves(true).await;

        let err = service.register("ann", "secret1").await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));

        // The failed registration must not leave a phantom user behind.
        assert!(store.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_registrations_do_not_lose_users() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = Arc::new(service_with(store.clone()));

        let mut handles = Vec::new();
        for i in 0..8 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.register(&format!("user{i}"), "secret1").await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.load_all().await.unwrap().len(), 8);
    }
}
