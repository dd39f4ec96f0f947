//! Domain layer containing the pricing and availability rules.
//!
//! Everything in this layer is pure and synchronous apart from the
//! repository traits, which only define contracts.
//!
//! # Architecture
//!
//! - [`date_range`] - Calendar-day ranges and day counting
//! - [`validation`] - Start/end ordering and minimum-date checks
//! - [`pricing`] - Daily/weekly rental cost and the sale path
//! - [`availability`] - Overlap detection against existing bookings
//! - [`clock`] - Injectable source of "today"
//! - [`entities`] - Vehicle listings
//! - [`repositories`] - Data access trait definitions
//!
//! # Quote Flow
//!
//! 1. A booking form submits a start and end date
//! 2. [`validation::DateRangeValidator`] produces a [`date_range::DateRange`]
//! 3. [`availability::AvailabilityChecker`] reports conflicting bookings
//! 4. [`pricing::cost_breakdown`] prices the range

pub mod availability;
pub mod clock;
pub mod date_range;
pub mod entities;
pub mod pricing;
pub mod repositories;
pub mod validation;
