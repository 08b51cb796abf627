//! Player proxy endpoints
//!
//! Thin authenticated pass-throughs to the third-party statistics APIs. The
//! handlers validate the UID and forward; the upstream JSON body is returned
//! under `data` untouched.

use axum::{Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::player::PlayerUid;

/// Create the player proxy router
pub fn create_player_router() -> Router<AppState> {
    Router::new()
        .route("/view-profile", post(view_profile))
        .route("/send-like", post(send_like))
}

/// Request carrying a player UID
#[derive(Debug, Deserialize)]
pub struct UidRequest {
    #[serde(default)]
    pub uid: String,
}

/// Profile lookup response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub data: Value,
}

/// Like delivery response
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

/// Look up a player profile
///
/// POST /api/view-profile
pub async fn view_profile(
    _user: RequireUser,
    State(state): State<AppState>,
    Json(request): Json<UidRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let uid = PlayerUid::new(&request.uid)
        .map_err(|e| ApiError::bad_request(e.to_string()).with_param("uid"))?;

    let data = state.player_api.view_profile(&uid).await?;

    Ok(Json(ProfileResponse {
        success: true,
        data,
    }))
}

/// Send a like to a player
///
/// POST /api/send-like
pub async fn send_like(
    _user: RequireUser,
    State(state): State<AppState>,
    Json(request): Json<UidRequest>,
) -> Result<Json<LikeResponse>, ApiError> {
    let uid = PlayerUid::new(&request.uid)
        .map_err(|e| ApiError::bad_request(e.to_string()).with_param("uid"))?;

    let data = state.player_api.send_like(&uid).await?;

    Ok(Json(LikeResponse {
        success: true,
        message: "Like sent successfully!".to_string(),
        data,
    }))
}
