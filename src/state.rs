//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AvailabilityService, QuoteService};
use crate::domain::clock::Clock;
use crate::domain::repositories::VehicleRepository;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::remote::RemoteVehicleRepository;

/// Everything a request needs, built once at startup.
///
/// Cloning is cheap: every member is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub quote_service: Arc<QuoteService<RemoteVehicleRepository>>,
    pub availability_service: Arc<AvailabilityService<RemoteVehicleRepository>>,
    pub vehicle_repository: Arc<RemoteVehicleRepository>,
    pub cache: Arc<dyn CacheService>,
    pub clock: Arc<dyn Clock>,
    pub currency_symbol: Arc<str>,
}

impl AppState {
    /// Wires services around a backend repository, cache and clock.
    pub fn new(
        vehicle_repository: Arc<RemoteVehicleRepository>,
        cache: Arc<dyn CacheService>,
        clock: Arc<dyn Clock>,
        cache_ttl_seconds: Option<u64>,
        currency_symbol: &str,
    ) -> Self {
        let mut availability = AvailabilityService::new(vehicle_repository.clone(), cache.clone());
        if let Some(ttl) = cache_ttl_seconds {
            availability = availability.with_cache_ttl(ttl);
        }
        let availability_service = Arc::new(availability);

        let quote_service = Arc::new(QuoteService::new(
            vehicle_repository.clone(),
            availability_service.clone(),
            clock.clone(),
        ));

        Self {
            quote_service,
            availability_service,
            vehicle_repository,
            cache,
            clock,
            currency_symbol: Arc::from(currency_symbol),
        }
    }

    /// Whether the marketplace backend answers.
    pub async fn backend_reachable(&self) -> bool {
        self.vehicle_repository.health_check().await
    }
}
