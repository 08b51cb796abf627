//! Session authentication extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::SessionIdentity;

/// Extractor that requires a valid session token.
///
/// Reads the token from the `Authorization: Bearer <token>` header, verifies
/// its signature and expiry, then confirms the user still exists in the
/// store. A session for a since-removed account is treated as invalid.
#[derive(Debug, Clone)]
pub struct RequireUser(pub SessionIdentity);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers)?;

        debug!("verifying session token");

        let claims = state
            .session_tokens
            .verify(&token)
            .map_err(|_| ApiError::unauthorized("Invalid or expired session"))?;

        let user = state
            .auth_service
            .get_user(claims.username())
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?
            .ok_or_else(|| ApiError::unauthorized("Invalid or expired session"))?;

        Ok(RequireUser(SessionIdentity::new(user.username())))
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_session_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(ApiError::unauthorized(
        "Not authenticated. Provide a session token via 'Authorization: Bearer <token>' header",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());

        assert_eq!(extract_session_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let headers = HeaderMap::new();

        let err = extract_session_token(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_other_auth_scheme_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwdw==".parse().unwrap());

        assert!(extract_session_token(&headers).is_err());
    }

    #[test]
    fn test_token_whitespace_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer   token   ".parse().unwrap());

        assert_eq!(extract_session_token(&headers).unwrap(), "token");
    }
}
