//! Cache trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resolved avatar URLs keyed by username.
///
/// An absent entry is `Ok(None)`, never an error: the adapter normalizes the
/// store's "not found" signal so the resolver never branches on store-specific
/// failure types. Store failures *are* propagated as [`CacheError`] - the
/// resolver, not the adapter, owns the degradation policy (it falls through to
/// a provider fetch and logs the degraded lookup).
///
/// Entries carry no TTL. Staleness is detected by probing the cached URL, not
/// by expiry metadata, so entries are only ever overwritten.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarCache: Send + Sync {
    /// Retrieves the last-known avatar URL for a username.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` when no entry exists
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the store cannot be reached or the
    /// operation fails.
    async fn get(&self, username: &str) -> CacheResult<Option<String>>;

    /// Stores a freshly fetched avatar URL, overwriting any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the store cannot be reached or the
    /// operation fails. Callers on the request path treat a failed write as
    /// non-fatal.
    async fn set(&self, username: &str, url: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
