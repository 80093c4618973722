mod common;

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{TimeDelta, Utc};

use avatar_redirector::domain::{Liveness, RateLimitStatus};
use common::{InMemoryCache, ScriptedProber, ScriptedProvider};

#[tokio::test]
async fn test_homepage_shows_rate_limit_status() {
    let cache = Arc::new(InMemoryCache::new());
    let prober = Arc::new(ScriptedProber::returning(Liveness::Live));

    // Reset a hair over 10 minutes out so the floored figure is stable even
    // after a few milliseconds of handler latency.
    let provider = Arc::new(ScriptedProvider::with_rate_limit(RateLimitStatus {
        remaining_hits: 123,
        hourly_limit: 150,
        reset_at: Utc::now() + TimeDelta::seconds(605),
    }));

    let state = common::test_state(cache, prober, provider);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("123"));
    assert!(body.contains("reset to 150"));
    assert!(body.contains("10 minutes"));
}

#[tokio::test]
async fn test_homepage_shows_zero_minutes_after_reset_passed() {
    let cache = Arc::new(InMemoryCache::new());
    let prober = Arc::new(ScriptedProber::returning(Liveness::Live));

    let provider = Arc::new(ScriptedProvider::with_rate_limit(RateLimitStatus {
        remaining_hits: 150,
        hourly_limit: 150,
        reset_at: Utc::now() - TimeDelta::seconds(90),
    }));

    let state = common::test_state(cache, prober, provider);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("0 minutes"));
}

#[tokio::test]
async fn test_homepage_provider_failure_returns_bad_gateway() {
    let cache = Arc::new(InMemoryCache::new());
    let prober = Arc::new(ScriptedProber::returning(Liveness::Live));
    let provider = Arc::new(ScriptedProvider::failing());

    let state = common::test_state(cache, prober, provider);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 502);
}
