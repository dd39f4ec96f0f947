//! # Rental Pricing
//!
//! Rental cost calculation and availability checks for a vehicle
//! marketplace, served over HTTP with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Date ranges, pricing rules, availability and repository traits
//! - **Application Layer** ([`application`]) - Quote and availability orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Marketplace REST client and Redis cache
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Pricing Rules
//!
//! - Stays of 7 days or more bill whole weeks at the weekly rate and the leftover
//!   days at the daily rate when a weekly rate is set
//! - Shorter stays, or listings without a weekly rate, are billed per day
//! - A range that cannot be priced yet (no rate, zero days) totals `0`
//! - Sale listings cost their flat price regardless of dates
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKEND_URL="https://api.example.com/api/v1"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AvailabilityService, Quote, QuoteService};
    pub use crate::domain::availability::{AvailabilityChecker, OccupiedRange};
    pub use crate::domain::date_range::DateRange;
    pub use crate::domain::entities::Vehicle;
    pub use crate::domain::pricing::{CostBreakdown, RateSchedule, calculate_cost};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
