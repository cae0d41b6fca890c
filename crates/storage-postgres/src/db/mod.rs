use std::sync::Arc;
use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use log::info;

use crate::errors::IntoCore;
use goaltracker_core::errors::Result;

pub mod executor;
pub use executor::DbExecutor;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds the connection pool without touching the database.
///
/// No connection is opened up front; each checkout dials the server on demand,
/// so the process starts even when PostgreSQL is down and requests report a
/// connection failure instead.
pub fn create_pool(database_url: &str, checkout_timeout: Duration) -> Arc<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .min_idle(Some(0))
        .connection_timeout(checkout_timeout)
        .build_unchecked(manager);
    info!(
        "Database pool ready (max {} connections, checkout timeout {:?})",
        pool.max_size(),
        checkout_timeout
    );
    Arc::new(pool)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().into_core()
}
