//! Redis-backed cache implementation.

use super::service::{AvatarCache, CacheError, CacheResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache implementation for avatar URL lookups.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// Entries are written without a TTL: a stale URL is caught by the liveness
/// probe on the next hit and overwritten, so expiry metadata buys nothing.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "avatar:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, username: &str) -> String {
        format!("{}{}", self.key_prefix, username)
    }
}

#[async_trait]
impl AvatarCache for RedisCache {
    async fn get(&self, username: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(username);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!("Cache HIT: {} -> {}", username, url);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", username);
                Ok(None)
            }
            Err(e) => Err(CacheError::OperationError(format!(
                "Redis GET failed for {}: {}",
                username, e
            ))),
        }
    }

    async fn set(&self, username: &str, url: &str) -> CacheResult<()> {
        let key = self.build_key(username);
        let mut conn = self.client.clone();

        match conn.set::<_, _, ()>(&key, url).await {
            Ok(_) => {
                debug!("Cache SET: {} -> {}", username, url);
                Ok(())
            }
            Err(e) => Err(CacheError::OperationError(format!(
                "Redis SET failed for {}: {}",
                username, e
            ))),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
