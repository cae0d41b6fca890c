//! Goal Tracker Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules of the goal tracker.
//! It is database-agnostic and defines the repository trait that is
//! implemented by the `storage-postgres` crate.

pub mod errors;
pub mod goals;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
