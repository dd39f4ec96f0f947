//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::availability::OccupiedRange;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for occupied-range sets, stored as JSON.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// All operations are fail-open: errors are logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_occupied`]
    ///   is called with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

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

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "occupied:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, vehicle_id: &str) -> String {
        format!("{}{}", self.key_prefix, vehicle_id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_occupied(&self, vehicle_id: &str) -> CacheResult<Option<Vec<OccupiedRange>>> {
        let key = self.build_key(vehicle_id);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<OccupiedRange>>(&payload) {
                Ok(ranges) => {
                    debug!("Cache HIT: {} ({} ranges)", vehicle_id, ranges.len());
                    Ok(Some(ranges))
                }
                Err(e) => {
                    warn!("Discarding unreadable cache entry for {}: {}", vehicle_id, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", vehicle_id);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", vehicle_id, e);
                Ok(None)
            }
        }
    }

    async fn set_occupied(
        &self,
        vehicle_id: &str,
        ranges: &[OccupiedRange],
        ttl: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(vehicle_id);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);

        let payload = serde_json::to_string(ranges)
            .map_err(|e| CacheError::OperationError(format!("Failed to encode ranges: {}", e)))?;

        match conn.set_ex::<_, _, ()>(&key, payload, ttl_seconds).await {
            Ok(_) => {
                debug!(
                    "Cache SET: {} ({} ranges, TTL: {}s)",
                    vehicle_id,
                    ranges.len(),
                    ttl_seconds
                );
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", vehicle_id, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
