//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; the implementation talking to the
//! marketplace backend lives in `crate::infrastructure::remote`. Mock
//! implementations are generated via `mockall` for unit tests.
//!
//! - [`VehicleRepository`] - Vehicle listings and their existing bookings

pub mod vehicle_repository;

pub use vehicle_repository::VehicleRepository;

#[cfg(test)]
pub use vehicle_repository::MockVehicleRepository;
