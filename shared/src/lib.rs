//! Shared types for the Gestión Administrativa backend
//!
//! Wire DTOs and database row models used by the server (and any future
//! client). Row types derive `sqlx::FromRow` behind the `db` feature so
//! clients can depend on the models without pulling in the database stack.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
