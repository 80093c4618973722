//! Liveness probing of cached avatar URLs.
//!
//! Provides a [`LivenessProber`] trait and its production implementation
//! [`HttpProber`], which issues a single HEAD request per call.

mod http_prober;
mod service;

pub use http_prober::HttpProber;
pub use service::LivenessProber;

#[cfg(test)]
pub use service::MockLivenessProber;
