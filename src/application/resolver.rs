//! Avatar resolution protocol.
//!
//! The resolver decides, per request, whether the cached URL for a username is
//! still valid, and if not, fetches a fresh one, stores it, and hands it back
//! for the redirect. Cached URLs are verified with a liveness probe; freshly
//! fetched URLs are trusted without verification, since the provider is
//! authoritative at fetch time. Probing strictly precedes any refetch decision
//! and a refetched URL is never probed in the same call.

use std::str::FromStr;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::Liveness;
use crate::error::AppError;
use crate::infrastructure::cache::AvatarCache;
use crate::infrastructure::probe::LivenessProber;
use crate::infrastructure::provider::IdentityProvider;
use crate::utils::username::validate_username;

/// Policy applied when a liveness probe returns neither live nor gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeErrorPolicy {
    /// Serve the cached URL anyway. Favors availability and avoids hammering
    /// the provider when the image host has a transient problem.
    TrustCache,
    /// Treat the entry as gone and refetch. Favors freshness at the cost of a
    /// provider call per inconclusive probe.
    Refetch,
}

impl FromStr for ProbeErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trust-cache" | "trust_cache" => Ok(Self::TrustCache),
            "refetch" => Ok(Self::Refetch),
            other => Err(format!(
                "unknown probe error policy '{}' (expected 'trust-cache' or 'refetch')",
                other
            )),
        }
    }
}

/// Resolves usernames to currently-valid avatar URLs.
///
/// Orchestrates the cache, the liveness prober, and the identity provider.
/// All three collaborators are injected at construction time; the resolver
/// holds no other state and imposes no cross-request locking.
pub struct AvatarResolver {
    cache: Arc<dyn AvatarCache>,
    prober: Arc<dyn LivenessProber>,
    provider: Arc<dyn IdentityProvider>,
    probe_error_policy: ProbeErrorPolicy,
}

impl AvatarResolver {
    /// Creates a resolver over the given collaborators.
    pub fn new(
        cache: Arc<dyn AvatarCache>,
        prober: Arc<dyn LivenessProber>,
        provider: Arc<dyn IdentityProvider>,
        probe_error_policy: ProbeErrorPolicy,
    ) -> Self {
        Self {
            cache,
            prober,
            provider,
            probe_error_policy,
        }
    }

    /// Resolves a username to an avatar URL fit for an immediate redirect.
    ///
    /// # Request Flow
    ///
    /// 1. Validate the username (rejected before any I/O)
    /// 2. Cache lookup; a cache failure degrades to a miss with a WARN log
    /// 3. On a hit, probe the cached URL:
    ///    - live → return it unchanged, zero provider calls
    ///    - gone → fall through to a fresh fetch
    ///    - inconclusive → per [`ProbeErrorPolicy`]
    /// 4. On a miss, fetch from the provider, write the URL back to the cache
    ///    (write failure is non-fatal), and return it unprobed
    ///
    /// At most one probe and one cache write happen per call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid username and
    /// [`AppError::Upstream`] when the provider call fails. Provider failures
    /// are not retried here.
    pub async fn resolve(&self, username: &str) -> Result<String, AppError> {
        validate_username(username)?;

        let cached = match self.cache.get(username).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(username, error = %e, "cache lookup failed, degrading to provider fetch");
                None
            }
        };

        if let Some(url) = cached {
            match self.prober.probe(&url).await {
                Liveness::Live => {
                    debug!(username, url, "cached avatar URL is live");
                    return Ok(url);
                }
                Liveness::Gone => {
                    debug!(username, url, "cached avatar URL is gone, refetching");
                }
                Liveness::Error => match self.probe_error_policy {
                    ProbeErrorPolicy::TrustCache => {
                        warn!(username, url, "probe inconclusive, serving cached URL");
                        return Ok(url);
                    }
                    ProbeErrorPolicy::Refetch => {
                        warn!(username, url, "probe inconclusive, refetching");
                    }
                },
            }
        }

        let fresh = self.provider.fetch_avatar(username).await.map_err(|e| {
            error!(username, error = %e, "provider fetch failed");
            AppError::upstream(
                "Identity provider request failed",
                json!({ "username": username }),
            )
        })?;

        // The fresh URL is trusted as-is; only previously-cached values get probed.
        if let Err(e) = self.cache.set(username, &fresh).await {
            warn!(username, error = %e, "failed to cache fresh avatar URL");
        }

        Ok(fresh)
    }
}
