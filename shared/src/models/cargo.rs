//! Cargo (job position) Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Job position entity
///
/// `nivel` is unique among active rows; deactivating a cargo frees its
/// nivel for reuse. Soft-deleted via `estatus` like `Empleado`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cargo {
    pub id: i64,
    pub nombre: String,
    pub nivel: i64,
    pub sueldo_base: f64,
    pub estatus: i64,
}

/// Create cargo payload (wire shape)
///
/// `nivel` and `sueldo_base` are raw JSON values so the handler can accept
/// numbers as well as numeric-looking strings before coercing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoCreate {
    pub nombre: Option<String>,
    pub nivel: Option<Value>,
    pub sueldo_base: Option<Value>,
}

/// Update cargo payload (sparse patch, wire shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoUpdate {
    pub nombre: Option<String>,
    pub nivel: Option<Value>,
    pub sueldo_base: Option<Value>,
}

/// Validated insert data handed to the repository
#[derive(Debug, Clone)]
pub struct CargoInsert {
    pub nombre: String,
    pub nivel: i64,
    pub sueldo_base: f64,
}

/// Validated patch data handed to the repository
#[derive(Debug, Clone, Default)]
pub struct CargoPatch {
    pub nombre: Option<String>,
    pub nivel: Option<i64>,
    pub sueldo_base: Option<f64>,
}

impl CargoPatch {
    /// True when the patch would not modify any column
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none() && self.nivel.is_none() && self.sueldo_base.is_none()
    }
}
