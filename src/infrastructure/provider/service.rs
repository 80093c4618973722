//! Identity provider trait and error types.

use crate::domain::RateLimitStatus;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur talking to the identity provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced a usable response (connect failure, timeout).
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not match the expected JSON shape.
    #[error("malformed provider payload: {0}")]
    MalformedPayload(String),
}

/// Trait for the upstream identity provider.
///
/// Both operations are single remote calls with JSON-shaped responses. The
/// client owns request/response mechanics and payload parsing only; retry and
/// caching policy live with the callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetches the current avatar URL for a username.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network failure, a non-success status, or
    /// a payload missing the avatar URL field.
    async fn fetch_avatar(&self, username: &str) -> Result<String, ProviderError>;

    /// Fetches the current rate-limit status of the API credential in use.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on network failure, a non-success status, or
    /// a malformed payload.
    async fn rate_limit_status(&self) -> Result<RateLimitStatus, ProviderError>;
}
