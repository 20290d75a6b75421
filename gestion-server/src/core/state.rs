use sqlx::SqlitePool;

use crate::core::{AppError, Config};
use crate::db::DbService;

/// Server state — shared by every handler
///
/// Cloning is cheap (`SqlitePool` is an `Arc` internally); each handler
/// borrows one pooled connection for the duration of its statements.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the storage layer and build the shared state
    ///
    /// Schema creation failure propagates out of here; `main` treats it as
    /// fatal and the process never starts serving traffic.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.db_path).await?;
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }
}
