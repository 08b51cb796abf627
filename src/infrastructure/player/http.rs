//! HTTP client for the upstream player-statistics APIs

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::error;

use crate::domain::DomainError;
use crate::domain::player::{PlayerApi, PlayerUid};

/// Upstream endpoint configuration
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Profile lookup endpoint; the UID is appended as `?uid=...`
    pub profile_url: String,
    /// Like endpoint; UID and API key are appended as query parameters
    pub like_url: String,
    /// API key sent with like requests
    pub like_api_key: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            profile_url: "https://glob-info.vercel.app/info".to_string(),
            like_url: "https://vortexapi.up.railway.app/like".to_string(),
            like_api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

/// reqwest-backed implementation of [`PlayerApi`].
///
/// Responses are passed through as raw JSON. Upstream statuses are
/// normalized: 404 becomes a not-found error, 429 a rate-limit error, and
/// everything else (including timeouts and connect failures) an upstream
/// error. Nothing here retries; the upstream APIs apply their own limits.
#[derive(Debug, Clone)]
pub struct HttpPlayerApi {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpPlayerApi {
    pub fn new(config: UpstreamConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    async fn get_json(&self, url: &str, api_name: &str) -> Result<Value, DomainError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::upstream(format!("{api_name} API request timed out"))
            } else {
                error!(api = api_name, error = %e, "upstream request failed");
                DomainError::upstream(format!("failed to reach {api_name} API"))
            }
        })?;

        match response.status() {
            status if status.is_success() => response.json().await.map_err(|e| {
                DomainError::upstream(format!("invalid response from {api_name} API: {e}"))
            }),
            StatusCode::NOT_FOUND => Err(DomainError::not_found("Player not found")),
            StatusCode::TOO_MANY_REQUESTS => Err(DomainError::rate_limited(
                "Rate limit exceeded. Please try again later.",
            )),
            status => {
                error!(api = api_name, %status, "upstream returned an error status");
                Err(DomainError::upstream(format!(
                    "{api_name} API returned status {status}"
                )))
            }
        }
    }
}

#[async_trait]
impl PlayerApi for HttpPlayerApi {
    async fn view_profile(&self, uid: &PlayerUid) -> Result<Value, DomainError> {
        let url = format!("{}?uid={}", self.config.profile_url, uid);
        self.get_json(&url, "profile").await
    }

    async fn send_like(&self, uid: &PlayerUid) -> Result<Value, DomainError> {
        let url = format!(
            "{}?uid={}&api_key={}",
            self.config.like_url, uid, self.config.like_api_key
        );
        self.get_json(&url, "like").await
    }
}
