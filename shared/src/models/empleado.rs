//! Empleado Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee entity, keyed by cédula (national id)
///
/// Dates are stored as SQLite TEXT in `YYYY-MM-DD` form and round-trip
/// through the API as the same ISO string. `estatus` is 1 for active rows,
/// 0 for logically deleted ones; rows are never physically removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Empleado {
    pub cedula: i64,
    pub nombre: String,
    pub cargo: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub sexo: Option<String>,
    pub fecha_ingreso: Option<NaiveDate>,
    pub telefono: Option<i64>,
    pub correo: Option<String>,
    pub estatus: i64,
}

/// Create empleado payload (wire shape)
///
/// Every field is optional at the serde layer; the handler checks presence
/// of `cedula` and `nombre` so a missing required field is a 400, not a
/// body-deserialization rejection. Dates arrive as ISO strings and are
/// parsed at the handler boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpleadoCreate {
    pub cedula: Option<i64>,
    pub nombre: Option<String>,
    pub cargo: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub sexo: Option<String>,
    pub fecha_ingreso: Option<String>,
    pub telefono: Option<i64>,
    pub correo: Option<String>,
}

/// Update empleado payload (sparse patch, wire shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpleadoUpdate {
    pub nombre: Option<String>,
    pub cargo: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub sexo: Option<String>,
    pub fecha_ingreso: Option<String>,
    pub telefono: Option<i64>,
    pub correo: Option<String>,
}

/// Validated insert data handed to the repository
#[derive(Debug, Clone)]
pub struct EmpleadoInsert {
    pub cedula: i64,
    pub nombre: String,
    pub cargo: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub sexo: Option<String>,
    pub fecha_ingreso: Option<NaiveDate>,
    pub telefono: Option<i64>,
    pub correo: Option<String>,
}

/// Validated patch data handed to the repository
///
/// `None` fields are left untouched by the UPDATE.
#[derive(Debug, Clone, Default)]
pub struct EmpleadoPatch {
    pub nombre: Option<String>,
    pub cargo: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub sexo: Option<String>,
    pub fecha_ingreso: Option<NaiveDate>,
    pub telefono: Option<i64>,
    pub correo: Option<String>,
}

impl EmpleadoPatch {
    /// True when the patch would not modify any column
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.cargo.is_none()
            && self.fecha_nacimiento.is_none()
            && self.sexo.is_none()
            && self.fecha_ingreso.is_none()
            && self.telefono.is_none()
            && self.correo.is_none()
    }
}
