//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, caching, validation and pricing rules. Services consume repository
//! traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::quote_service::QuoteService`] - Rental and sale quotes
//! - [`services::availability_service::AvailabilityService`] - Conflict checks and calendars

pub mod services;
