//! Infrastructure layer for external integrations.
//!
//! This layer implements the seams consumed by the resolver, providing
//! concrete adapters for the external collaborators.
//!
//! # Modules
//!
//! - [`cache`] - Avatar URL cache (Redis and no-op implementations)
//! - [`probe`] - HEAD-request liveness probing of cached URLs
//! - [`provider`] - Identity provider API client

pub mod cache;
pub mod probe;
pub mod provider;
