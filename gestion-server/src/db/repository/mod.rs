//! Repository Module
//!
//! CRUD operations over the SQLite tables, one module per entity. All
//! functions take the pool explicitly; mutating operations run inside a
//! single transaction and roll back on any failure before it surfaces.

pub mod cargo;
pub mod empleado;

use thiserror::Error;

/// Repository error types
///
/// Absence (row missing or already inactive) is not an error — those
/// operations return `Option`/`bool` instead.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
