use std::sync::Arc;

use diesel::pg::PgConnection;
use goaltracker_core::errors::Result;

use super::{get_connection, DbPool};
use crate::errors::StorageError;

/// Runs one database job per call on a freshly checked-out connection.
///
/// Diesel is synchronous, so each job runs on Tokio's blocking pool. The
/// connection goes back to the pool when the job returns, on success and on
/// error alike.
#[derive(Clone)]
pub struct DbExecutor {
    pool: Arc<DbPool>,
}

impl DbExecutor {
    pub fn new(pool: Arc<DbPool>) -> Self {
        DbExecutor { pool }
    }

    /// Executes `job` with a pooled connection.
    ///
    /// # Arguments
    /// * `job`: A closure that takes a mutable reference to `PgConnection`
    ///   and runs a single statement.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut PgConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = get_connection(&pool)?;
            job(&mut *conn)
        })
        .await
        .map_err(StorageError::from)?
    }
}
