//! No-op cache implementation for testing or disabled caching.

use super::service::{AvatarCache, CacheResult};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is unavailable or caching is explicitly disabled. Every
/// lookup misses, so every request goes straight to the identity provider.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Testing scenarios where caching should be bypassed
/// - Fallback when Redis connection fails at startup
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvatarCache for NullCache {
    async fn get(&self, _username: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _username: &str, _url: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
