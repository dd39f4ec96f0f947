//! Access to the marketplace REST backend (`/api/v1`).
//!
//! - [`RestClient`] - Pooled JSON client with a fixed timeout
//! - [`RemoteVehicleRepository`] - [`crate::domain::repositories::VehicleRepository`] over the backend
//! - [`records`] - Wire records and their normalisation into domain types

mod client;
pub mod records;
mod vehicle_repository;

pub use client::{RemoteError, RestClient};
pub use vehicle_repository::RemoteVehicleRepository;
