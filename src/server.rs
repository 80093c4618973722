//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, HTTP client construction, resolver wiring, and Axum
//! server lifecycle.

use crate::application::resolver::AvatarResolver;
use crate::config::Config;
use crate::infrastructure::cache::{AvatarCache, NullCache, RedisCache};
use crate::infrastructure::probe::HttpProber;
use crate::infrastructure::provider::{IdentityProvider, TwitterClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache (or NullCache fallback)
/// - Shared outbound HTTP client for probes and provider calls
/// - Avatar resolver
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache: Arc<dyn AvatarCache> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    // One client serves both probes and provider calls; its timeout is the
    // only timeout policy in the system.
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .user_agent(concat!("avatar-redirector/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let prober = Arc::new(HttpProber::new(http_client.clone()));
    let provider: Arc<dyn IdentityProvider> = Arc::new(TwitterClient::new(
        http_client,
        config.provider_base_url.clone(),
    ));

    let resolver = Arc::new(AvatarResolver::new(
        cache.clone(),
        prober,
        provider.clone(),
        config.probe_error_policy,
    ));

    let state = AppState::new(resolver, provider, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Completes when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
