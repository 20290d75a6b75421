//! Data models
//!
//! Shared between gestion-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Identifiers are `i64` (SQLite INTEGER PRIMARY KEY / cédula).

pub mod cargo;
pub mod empleado;

// Re-exports
pub use cargo::*;
pub use empleado::*;
