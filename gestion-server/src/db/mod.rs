//! Database Module
//!
//! SQLite connection pool and idempotent schema creation.

pub mod repository;

use crate::core::AppError;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Embedded schema migrations (tests apply them to in-memory pools too)
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Database service — owns the SQLite connection pool
///
/// Handlers check one pooled connection out per statement sequence; the
/// pool returns it on every exit path, so a request can never leak its
/// handle. WAL mode keeps readers unblocked while a writer commits.
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database (creating the file if missing) and apply the schema
    ///
    /// Failure here is fatal to startup; the server must not accept
    /// traffic without the schema in place.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        // busy_timeout: writers wait up to 5s on contention instead of failing
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to set busy_timeout: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database schema ready");

        Ok(Self { pool })
    }
}
