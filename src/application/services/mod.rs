//! Business logic services for the application layer.

pub mod availability_service;
pub mod quote_service;

pub use availability_service::AvailabilityService;
pub use quote_service::{Quote, QuoteService};
