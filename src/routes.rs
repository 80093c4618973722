//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`             - Homepage with provider rate-limit status (public)
//! - `GET /favicon.ico`  - Always 404, never reaches the resolver
//! - `GET /healthz`      - Health check: cache connectivity (public)
//! - `GET /{username}`   - Avatar redirect (public)
//!
//! `favicon.ico` and `healthz` are registered before the `{username}` capture,
//! so those names are not resolvable as usernames.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{avatar_handler, favicon_handler, health_handler, home_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/favicon.ico", get(favicon_handler))
        .route("/healthz", get(health_handler))
        .route("/{username}", get(avatar_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
