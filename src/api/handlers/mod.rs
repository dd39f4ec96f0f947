//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod availability;
pub mod calendar;
pub mod health;
pub mod price;
pub mod quote;

pub use availability::availability_handler;
pub use calendar::calendar_handler;
pub use health::health_handler;
pub use price::price_handler;
pub use quote::quote_handler;
