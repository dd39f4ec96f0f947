use crate::domain::availability::OccupiedRange;
use crate::domain::entities::Vehicle;
use crate::domain::repositories::VehicleRepository;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use url::Url;

use super::client::RestClient;
use super::records::{BookingRecord, VehicleRecord};

/// Reads vehicles and bookings from the marketplace backend.
///
/// # Endpoints
///
/// - `GET {base}/vehicles/{id}`
/// - `GET {base}/vehicles/{id}/bookings`
pub struct RemoteVehicleRepository {
    client: RestClient,
}

impl RemoteVehicleRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }
}

#[async_trait]
impl VehicleRepository for RemoteVehicleRepository {
    async fn find_vehicle(&self, vehicle_id: &str) -> Result<Option<Vehicle>, AppError> {
        let record = self
            .client
            .get_json::<VehicleRecord>(&["vehicles", vehicle_id])
            .await?;

        match record {
            Some(record) => Ok(Some(Vehicle::try_from(record)?)),
            None => Ok(None),
        }
    }

    async fn occupied_ranges(&self, vehicle_id: &str) -> Result<Vec<OccupiedRange>, AppError> {
        let records = self
            .client
            .get_json::<Vec<BookingRecord>>(&["vehicles", vehicle_id, "bookings"])
            .await?
            .ok_or_else(|| {
                AppError::not_found("Vehicle not found", json!({ "vehicle_id": vehicle_id }))
            })?;

        tracing::debug!(
            vehicle_id,
            count = records.len(),
            "Fetched occupied ranges"
        );

        Ok(records.into_iter().map(OccupiedRange::from).collect())
    }

    async fn health_check(&self) -> bool {
        self.client.ping().await
    }
}
