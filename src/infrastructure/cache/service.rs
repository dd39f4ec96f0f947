//! Cache service trait and error types.

use async_trait::async_trait;

use crate::domain::availability::OccupiedRange;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching the occupied ranges of a vehicle.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures should degrade to backend lookups).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached occupied ranges for a vehicle.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ranges))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_occupied(&self, vehicle_id: &str) -> CacheResult<Option<Vec<OccupiedRange>>>;

    /// Stores the occupied ranges of a vehicle with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `vehicle_id` - The vehicle key
    /// - `ranges` - The complete occupied set
    /// - `ttl_seconds` - Optional TTL in seconds (implementation-specific default if None)
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations should log errors
    /// and return `Ok(())` to avoid disrupting the request flow.
    async fn set_occupied(
        &self,
        vehicle_id: &str,
        ranges: &[OccupiedRange],
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;

    /// Short name of the backend for health reporting.
    fn backend_name(&self) -> &'static str;
}
