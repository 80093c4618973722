//! # Avatar Redirector
//!
//! A self-healing avatar redirect service built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core value objects (liveness classification, rate-limit status)
//! - **Application Layer** ([`application`]) - The avatar resolution protocol
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache, liveness probing, provider client
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## How it works
//!
//! `GET /{username}` resolves the username to a currently-valid avatar image URL
//! and answers with a redirect. Resolved URLs are cached in Redis without a TTL;
//! staleness is detected by probing the cached URL with a HEAD request on every
//! hit, and a stale entry triggers a fresh fetch from the identity provider.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: enable caching
//! export REDIS_URL="redis://localhost:6379"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::resolver::{AvatarResolver, ProbeErrorPolicy};
    pub use crate::domain::{Liveness, RateLimitStatus};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
