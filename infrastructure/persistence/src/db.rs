use futures_util::future::BoxFuture;
use sqlx::{PgConnection, PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    // Checks that the migrations directory exists
    if !path.exists() {
        return Err(DatabaseError::MigrationError);
    }

    // Runs the migrations
    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|_| DatabaseError::MigrationError)
}

/// Logs a database error and collapses it into the repository error the
/// domain layer understands.
pub(crate) fn db_error(err: sqlx::Error) -> RepositoryError {
    if matches!(err, sqlx::Error::RowNotFound) {
        return RepositoryError::NotFound;
    }

    tracing::error!("database error: {err}");
    RepositoryError::DatabaseError
}

/// Runs `work` inside a single database transaction.
///
/// The closure receives a transaction-scoped connection; every statement
/// issued through it is invisible to other transactions until commit.
/// Sub-operations join the transaction by taking the same connection instead
/// of opening their own. The transaction commits when `work` returns `Ok`
/// and rolls back on `Err` (or on a failed commit), so multi-step operations
/// never leave partial state behind.
pub async fn run_in_transaction<T, E, F>(pool: &PgPool, work: F) -> Result<T, E>
where
    T: Send,
    E: From<RepositoryError> + Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, E>> + Send,
{
    let mut tx = pool.begin().await.map_err(|err| {
        tracing::error!("failed to begin transaction: {err}");
        E::from(RepositoryError::Transaction)
    })?;

    match work(&mut *tx).await {
        Ok(value) => {
            tx.commit().await.map_err(|err| {
                tracing::error!("failed to commit transaction: {err}");
                E::from(RepositoryError::Transaction)
            })?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("failed to roll back transaction: {rollback_err}");
            }
            Err(err)
        }
    }
}
