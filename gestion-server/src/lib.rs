//! Gestión Administrativa backend
//!
//! HTTP API for personnel records: empleados (employees) and cargos (job
//! positions), persisted in an embedded SQLite database with soft-delete
//! semantics — rows are deactivated, never removed.
//!
//! # Module structure
//!
//! ```text
//! gestion-server/src/
//! ├── core/      # config, state, server lifecycle, errors
//! ├── api/       # HTTP routes and handlers
//! ├── db/        # connection pool and repositories
//! ├── routes/    # router assembly and middleware
//! └── utils/     # validation, logging, extraction
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod utils;

// Re-export public types
pub use crate::core::{AppError, AppResult, Config, Server, ServerState};

/// Set up the process environment: .env file, then logging from
/// `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() {
    let _ = dotenv::dotenv();

    let level = std::env::var("LOG_LEVEL").ok();
    let dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(level.as_deref(), dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ______          __  _
  / ____/__  _____/ /_(_)___  ____
 / / __/ _ \/ ___/ __/ / __ \/ __ \
/ /_/ /  __(__  ) /_/ / /_/ / / / /
\____/\___/____/\__/_/\____/_/ /_/
    "#
    );
}
