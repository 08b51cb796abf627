//! Pixel Panel
//!
//! A small player-stats panel service:
//! - username/password authentication over a flat JSON user store
//! - signed session tokens
//! - authenticated proxy endpoints forwarding player UIDs to third-party
//!   game-statistics APIs

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, AuthServiceTrait};
use infrastructure::auth::{Argon2Hasher, AuthService};
use infrastructure::player::{HttpPlayerApi, UpstreamConfig};
use infrastructure::session::{SessionTokenConfig, SessionTokenService};
use infrastructure::store::JsonFileUserStore;
use rand::Rng;
use tracing::{info, warn};

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = Arc::new(JsonFileUserStore::new(&config.store.path));
    info!(path = %config.store.path, "using JSON file user store");

    let auth_service: Arc<dyn AuthServiceTrait> = Arc::new(AuthService::new(
        store.clone(),
        Arc::new(Argon2Hasher::new()),
    ));

    let session_tokens = Arc::new(SessionTokenService::new(SessionTokenConfig::new(
        resolve_session_secret(config),
        config.session.expiration_hours,
    )));

    let player_api = Arc::new(HttpPlayerApi::new(UpstreamConfig {
        profile_url: config.upstream.profile_url.clone(),
        like_url: config.upstream.like_url.clone(),
        like_api_key: resolve_like_api_key(config),
        timeout_secs: config.upstream.timeout_secs,
    })?);

    Ok(AppState::new(auth_service, session_tokens, player_api, store))
}

/// Resolve the session signing secret: config, then the SESSION_SECRET
/// environment variable, then a random per-process secret.
fn resolve_session_secret(config: &AppConfig) -> String {
    config
        .session
        .secret
        .clone()
        .or_else(|| std::env::var("SESSION_SECRET").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| {
            warn!(
                "No session secret configured. Generating a random one; \
                sessions will NOT survive a restart. Set SESSION_SECRET for \
                persistent sessions."
            );
            generate_random_secret()
        })
}

/// Resolve the like API key: config, then the VORTEX_API_KEY environment
/// variable. The like upstream rejects requests without one.
fn resolve_like_api_key(config: &AppConfig) -> String {
    config
        .upstream
        .like_api_key
        .clone()
        .or_else(|| std::env::var("VORTEX_API_KEY").ok())
        .unwrap_or_else(|| {
            warn!("No like API key configured; set VORTEX_API_KEY");
            String::new()
        })
}

fn generate_random_secret() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_with_defaults() {
        let state = create_app_state(&AppConfig::default()).unwrap();
        assert_eq!(state.session_tokens.expiration_hours(), 24);
    }

    #[test]
    fn test_random_secret_length() {
        let secret = generate_random_secret();
        assert_eq!(secret.len(), 64);
        assert_ne!(secret, generate_random_secret());
    }

    #[test]
    fn test_configured_secret_wins() {
        let mut config = AppConfig::default();
        config.session.secret = Some("configured".to_string());

        assert_eq!(resolve_session_secret(&config), "configured");
    }
}
