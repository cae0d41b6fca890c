//! PostgreSQL storage implementation for the goal tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with PostgreSQL.
//! It implements the repository trait defined in `goaltracker-core` and contains:
//! - Connection pooling and the per-call connection executor
//! - The `goals` table schema
//! - The goal repository and its Diesel model types
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` crate and the server work with traits only.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!  storage-postgres (this crate)
//!              │
//!              ▼
//!         PostgreSQL
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod goals;

// Re-export database utilities
pub use db::{create_pool, get_connection, DbConnection, DbExecutor, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from goaltracker-core for convenience
pub use goaltracker_core::errors::{DatabaseError, Error, Result};
