//! Core domain value objects.
//!
//! This layer holds the vocabulary shared by the resolver and the
//! infrastructure adapters:
//!
//! - [`Liveness`] - classification of a URL existence probe
//! - [`RateLimitStatus`] - snapshot of the provider call budget

pub mod liveness;
pub mod rate_limit;

pub use liveness::Liveness;
pub use rate_limit::RateLimitStatus;
