//! Identity provider API client.
//!
//! Provides an [`IdentityProvider`] trait and its production implementation
//! [`TwitterClient`], which talks JSON to the upstream social-network API.

mod service;
mod twitter;

pub use service::{IdentityProvider, ProviderError};
pub use twitter::TwitterClient;

#[cfg(test)]
pub use service::MockIdentityProvider;
