//! Liveness prober trait.

use crate::domain::Liveness;
use async_trait::async_trait;

/// Trait for checking whether a URL still resolves to a live resource.
///
/// A prober is a pure URL-in, classification-out capability: it knows nothing
/// about caching or usernames. One attempt per call, no retries; anything
/// short of a clear live/gone signal is [`Liveness::Error`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LivenessProber: Send + Sync {
    /// Performs a metadata-only existence check against `url`.
    async fn probe(&self, url: &str) -> Liveness;
}
