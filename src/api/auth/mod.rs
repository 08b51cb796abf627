//! Authentication API endpoints
//!
//! Registration, login, logout, and current-user info. Successful
//! registration and login both return a signed session token; logout is
//! client-side token discard and exists for API consistency.

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::SessionIdentity;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(current_user))
}

/// Credentials submitted to register or login
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response for a freshly established session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserResponse,
    pub expires_at: String,
}

/// User info safe to expose
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
}

/// Logout confirmation
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Register a new account
///
/// POST /auth/register
///
/// Validation failures return 400 with a corrective message; on success the
/// new account is logged in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let identity = state
        .auth_service
        .register(&request.username, &request.password)
        .await?;

    issue_session(&state, &identity)
}

/// Login with username and password
///
/// POST /auth/login
///
/// All credential failures return the same generic 401.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let identity = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    issue_session(&state, &identity)
}

/// Logout
///
/// POST /auth/logout
///
/// Sessions are stateless signed tokens, so logout is handled client-side by
/// discarding the token. Calling it repeatedly is fine.
pub async fn logout(_user: RequireUser) -> Result<Json<LogoutResponse>, ApiError> {
    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Get the currently authenticated user
///
/// GET /auth/me
pub async fn current_user(
    RequireUser(identity): RequireUser,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(UserResponse {
        username: identity.username().to_string(),
    }))
}

fn issue_session(
    state: &AppState,
    identity: &SessionIdentity,
) -> Result<Json<SessionResponse>, ApiError> {
    let token = state
        .session_tokens
        .issue(identity)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let expires_at = Utc::now() + Duration::hours(state.session_tokens.expiration_hours() as i64);

    Ok(Json(SessionResponse {
        token,
        user: UserResponse {
            username: identity.username().to_string(),
        },
        expires_at: expires_at.to_rfc3339(),
    }))
}
