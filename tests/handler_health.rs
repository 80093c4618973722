mod common;

use std::sync::Arc;

use axum_test::TestServer;

use avatar_redirector::domain::Liveness;
use common::{InMemoryCache, ScriptedProber, ScriptedProvider};

#[tokio::test]
async fn test_health_reports_healthy_with_reachable_cache() {
    let cache = Arc::new(InMemoryCache::new());
    let prober = Arc::new(ScriptedProber::returning(Liveness::Live));
    let provider = Arc::new(ScriptedProvider::with_avatar("avatar_url"));

    let state = common::test_state(cache, prober, provider);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/healthz").await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["cache"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_degraded_with_unreachable_cache() {
    let cache = Arc::new(InMemoryCache::unhealthy());
    let prober = Arc::new(ScriptedProber::returning(Liveness::Live));
    let provider = Arc::new(ScriptedProvider::with_avatar("avatar_url"));

    let state = common::test_state(cache, prober, provider);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/healthz").await;

    assert_eq!(response.status_code(), 503);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["cache"]["status"], "error");
}
