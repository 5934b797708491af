//! Shared database types for the job board
//!
//! Pool creation and the repository error type used by domain repositories.

use crate::config::Config;
use crate::error::Error;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

/// PostgreSQL error code for `foreign_key_violation`
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Classify a write error, turning a dangling foreign key into `NotFound`
    pub fn from_write(err: sqlx::Error) -> Self {
        if is_foreign_key_violation(&err) {
            RepositoryError::NotFound
        } else {
            RepositoryError::Connection(err)
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::Connection(e) => Error::Database(e),
        }
    }
}

/// Whether the error is a foreign-key violation reported by PostgreSQL
fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION),
        _ => false,
    }
}

/// Create the shared connection pool from configuration
pub async fn create_pool(config: &Config) -> anyhow::Result<PgPool> {
    info!(
        max_connections = config.max_connections,
        "Connecting to database"
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options()?)
        .await?;
    Ok(pool)
}
