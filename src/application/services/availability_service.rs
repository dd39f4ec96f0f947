//! Availability checks and calendars for backend vehicles.

use std::sync::Arc;

use crate::domain::availability::{Availability, AvailabilityChecker, CalendarDay};
use crate::domain::date_range::DateRange;
use crate::domain::repositories::VehicleRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service answering "is this vehicle free?" questions.
///
/// Occupied ranges are read through the cache: a hit skips the backend, a
/// miss fetches from the repository and populates the cache. Cache errors
/// never fail a request.
pub struct AvailabilityService<R: VehicleRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: Option<u64>,
}

impl<R: VehicleRepository> AvailabilityService<R> {
    /// Creates a new availability service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            repository,
            cache,
            cache_ttl_seconds: None,
        }
    }

    /// Overrides the cache's default TTL for occupied-range entries.
    pub fn with_cache_ttl(mut self, ttl_seconds: u64) -> Self {
        self.cache_ttl_seconds = Some(ttl_seconds);
        self
    }

    /// Builds a checker over the vehicle's current bookings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vehicle does not exist.
    /// Returns [`AppError::Upstream`] on backend failures.
    pub async fn checker_for(&self, vehicle_id: &str) -> Result<AvailabilityChecker, AppError> {
        match self.cache.get_occupied(vehicle_id).await {
            Ok(Some(ranges)) => return Ok(AvailabilityChecker::new(ranges)),
            Ok(None) => {}
            Err(e) => tracing::warn!("Cache read failed for {}: {}", vehicle_id, e),
        }

        let ranges = self.repository.occupied_ranges(vehicle_id).await?;

        if let Err(e) = self
            .cache
            .set_occupied(vehicle_id, &ranges, self.cache_ttl_seconds)
            .await
        {
            tracing::warn!("Cache write failed for {}: {}", vehicle_id, e);
        }

        Ok(AvailabilityChecker::new(ranges))
    }

    /// Checks a candidate range against the vehicle's bookings.
    ///
    /// A conflict is a normal outcome (`available == false`), not an error.
    pub async fn check(
        &self,
        vehicle_id: &str,
        candidate: &DateRange,
    ) -> Result<Availability, AppError> {
        let availability = self.checker_for(vehicle_id).await?.check(candidate);

        if !availability.available {
            tracing::debug!(
                vehicle_id,
                conflicts = availability.conflicts.len(),
                "Candidate range conflicts with existing bookings"
            );
        }

        Ok(availability)
    }

    /// Per-day occupancy for one calendar month.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid year/month, in
    /// addition to the errors of [`Self::checker_for`].
    pub async fn calendar(
        &self,
        vehicle_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarDay>, AppError> {
        let checker = self.checker_for(vehicle_id).await?;
        Ok(checker.month_calendar(year, month)?)
    }
}
