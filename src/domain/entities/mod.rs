//! Core domain entities.
//!
//! Entities are plain data structures built at the system boundary from the
//! marketplace backend's records (see [`crate::infrastructure::remote`]).
//!
//! - [`Vehicle`] - A listing offered for rent or for sale

pub mod vehicle;

pub use vehicle::Vehicle;
