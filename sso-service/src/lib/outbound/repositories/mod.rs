use std::future::Future;
use std::time::Duration;

use crate::identity::errors::StoreError;

pub mod app;
pub mod user;

pub use app::PostgresAppRepository;
pub use user::PostgresUserRepository;

/// Run a store call under a deadline.
///
/// Elapsed deadlines and pool-acquire timeouts both surface as
/// `StoreError::Timeout`; the in-flight query is dropped.
pub(crate) async fn with_deadline<T, F>(deadline: Duration, query: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, query).await {
        Ok(result) => result.map_err(to_store_error),
        Err(_) => Err(StoreError::Timeout),
    }
}

pub(crate) fn to_store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::PoolTimedOut => StoreError::Timeout,
        err => {
            if let Some(db_err) = err.as_database_error() {
                if db_err.is_unique_violation() {
                    let constraint = db_err.constraint().unwrap_or("unique").to_string();
                    return StoreError::Duplicate(constraint);
                }
            }
            StoreError::Database(err.to_string())
        }
    }
}
