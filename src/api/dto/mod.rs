//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Dates travel as `YYYY-MM-DD` strings.

pub mod availability;
pub mod calendar;
pub mod cost;
pub mod health;
pub mod price;
pub mod quote;
