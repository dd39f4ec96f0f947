//! Repository trait for vehicle listings and their bookings.

use crate::domain::availability::OccupiedRange;
use crate::domain::entities::Vehicle;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to vehicles and the date ranges already booked on them.
///
/// # Implementations
///
/// - [`crate::infrastructure::remote::RemoteVehicleRepository`] - Marketplace REST backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Finds a vehicle by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Vehicle))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the backend is unreachable or
    /// returns a malformed record.
    async fn find_vehicle(&self, vehicle_id: &str) -> Result<Option<Vehicle>, AppError>;

    /// Lists the occupied date ranges of a vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vehicle does not exist.
    /// Returns [`AppError::Upstream`] on backend failures.
    async fn occupied_ranges(&self, vehicle_id: &str) -> Result<Vec<OccupiedRange>, AppError>;

    /// Checks if the data source is reachable.
    async fn health_check(&self) -> bool;
}
