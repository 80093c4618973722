#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use tokio::sync::Mutex;

use avatar_redirector::api::handlers::{
    avatar_handler, favicon_handler, health_handler, home_handler,
};
use avatar_redirector::application::resolver::{AvatarResolver, ProbeErrorPolicy};
use avatar_redirector::domain::{Liveness, RateLimitStatus};
use avatar_redirector::infrastructure::cache::{AvatarCache, CacheError, CacheResult};
use avatar_redirector::infrastructure::probe::LivenessProber;
use avatar_redirector::infrastructure::provider::{IdentityProvider, ProviderError};
use avatar_redirector::state::AppState;

/// In-memory cache fake with inspectable entries.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, String>>,
    healthy: bool,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            healthy: true,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            healthy: false,
        }
    }

    pub async fn preload(&self, username: &str, url: &str) {
        self.entries
            .lock()
            .await
            .insert(username.to_string(), url.to_string());
    }

    pub async fn entry(&self, username: &str) -> Option<String> {
        self.entries.lock().await.get(username).cloned()
    }
}

#[async_trait]
impl AvatarCache for InMemoryCache {
    async fn get(&self, username: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().await.get(username).cloned())
    }

    async fn set(&self, username: &str, url: &str) -> CacheResult<()> {
        self.entries
            .lock()
            .await
            .insert(username.to_string(), url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

/// Cache fake whose operations always fail.
pub struct BrokenCache;

#[async_trait]
impl AvatarCache for BrokenCache {
    async fn get(&self, _username: &str) -> CacheResult<Option<String>> {
        Err(CacheError::ConnectionError("store unreachable".to_string()))
    }

    async fn set(&self, _username: &str, _url: &str) -> CacheResult<()> {
        Err(CacheError::ConnectionError("store unreachable".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Prober fake returning a fixed classification and recording probed URLs.
pub struct ScriptedProber {
    liveness: Liveness,
    probed: Mutex<Vec<String>>,
}

impl ScriptedProber {
    pub fn returning(liveness: Liveness) -> Self {
        Self {
            liveness,
            probed: Mutex::new(Vec::new()),
        }
    }

    pub async fn probed_urls(&self) -> Vec<String> {
        self.probed.lock().await.clone()
    }
}

#[async_trait]
impl LivenessProber for ScriptedProber {
    async fn probe(&self, url: &str) -> Liveness {
        self.probed.lock().await.push(url.to_string());
        self.liveness
    }
}

/// Provider fake with scripted responses and call counting.
pub struct ScriptedProvider {
    avatar_url: Option<String>,
    rate_limit: Option<RateLimitStatus>,
    fetch_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn with_avatar(url: &str) -> Self {
        Self {
            avatar_url: Some(url.to_string()),
            rate_limit: None,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_rate_limit(status: RateLimitStatus) -> Self {
        Self {
            avatar_url: None,
            rate_limit: Some(status),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            avatar_url: None,
            rate_limit: None,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for ScriptedProvider {
    async fn fetch_avatar(&self, _username: &str) -> Result<String, ProviderError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.avatar_url
            .clone()
            .ok_or_else(|| ProviderError::MalformedPayload("scripted failure".to_string()))
    }

    async fn rate_limit_status(&self) -> Result<RateLimitStatus, ProviderError> {
        self.rate_limit
            .ok_or_else(|| ProviderError::MalformedPayload("scripted failure".to_string()))
    }
}

/// Builds an [`AppState`] over the given fakes with the default probe policy.
pub fn test_state(
    cache: Arc<dyn AvatarCache>,
    prober: Arc<dyn LivenessProber>,
    provider: Arc<dyn IdentityProvider>,
) -> AppState {
    let resolver = Arc::new(AvatarResolver::new(
        cache.clone(),
        prober,
        provider.clone(),
        ProbeErrorPolicy::TrustCache,
    ));

    AppState::new(resolver, provider, cache)
}

/// Router mirroring the production route table, minus the outer layers.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route("/healthz", get(health_handler))
        .route("/{username}", get(avatar_handler))
        .with_state(state)
}
