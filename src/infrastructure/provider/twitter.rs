//! Twitter API client.

use super::service::{IdentityProvider, ProviderError};
use crate::domain::RateLimitStatus;
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;
use tracing::debug;

/// Raw shape of the user lookup response.
///
/// Parsed at the client boundary so internal code never inspects untyped
/// payloads.
#[derive(Debug, Deserialize)]
struct UserPayload {
    profile_image_url: Option<String>,
}

/// Raw shape of the rate-limit status response.
#[derive(Debug, Deserialize)]
struct RateLimitPayload {
    remaining_hits: u32,
    hourly_limit: u32,
    reset_time_in_seconds: i64,
}

impl RateLimitPayload {
    fn into_status(self) -> Result<RateLimitStatus, ProviderError> {
        let reset_at = DateTime::from_timestamp(self.reset_time_in_seconds, 0).ok_or_else(|| {
            ProviderError::MalformedPayload(format!(
                "reset_time_in_seconds out of range: {}",
                self.reset_time_in_seconds
            ))
        })?;

        Ok(RateLimitStatus {
            remaining_hits: self.remaining_hits,
            hourly_limit: self.hourly_limit,
            reset_at,
        })
    }
}

/// Identity provider client for the Twitter REST API.
///
/// Performs single, unretried JSON calls against the configured base URL.
/// Timeouts come from the shared `reqwest` client and surface as
/// [`ProviderError::Request`].
pub struct TwitterClient {
    client: reqwest::Client,
    base_url: String,
}

impl TwitterClient {
    /// Creates a client using the given shared HTTP client and API base URL
    /// (e.g., `"https://api.twitter.com/1"`).
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for TwitterClient {
    async fn fetch_avatar(&self, username: &str) -> Result<String, ProviderError> {
        let payload: UserPayload = self
            .get_json("/users/show.json", &[("screen_name", username)])
            .await?;

        let url = payload.profile_image_url.ok_or_else(|| {
            ProviderError::MalformedPayload("missing profile_image_url".to_string())
        })?;

        if url.is_empty() {
            return Err(ProviderError::MalformedPayload(
                "empty profile_image_url".to_string(),
            ));
        }

        debug!(username, url, "fetched avatar URL from provider");
        Ok(url)
    }

    async fn rate_limit_status(&self) -> Result<RateLimitStatus, ProviderError> {
        let payload: RateLimitPayload = self
            .get_json("/account/rate_limit_status.json", &[])
            .await?;

        payload.into_status()
    }
}
