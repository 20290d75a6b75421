//! Empleado Repository

use super::RepoResult;
use shared::models::{Empleado, EmpleadoInsert, EmpleadoPatch};
use sqlx::SqlitePool;

const EMPLEADO_SELECT: &str = "SELECT cedula, nombre, cargo, fecha_nacimiento, sexo, fecha_ingreso, telefono, correo, estatus FROM empleados";

/// Find all active empleados, ordered by nombre
pub async fn find_all_active(pool: &SqlitePool) -> RepoResult<Vec<Empleado>> {
    let sql = format!("{EMPLEADO_SELECT} WHERE estatus = 1 ORDER BY nombre");
    let rows = sqlx::query_as::<_, Empleado>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Insert a new empleado and return the persisted row
///
/// `estatus` is forced to 1 regardless of caller input. A cédula or correo
/// collision surfaces as `RepoError::Duplicate`; the transaction rolls back
/// on every error path.
pub async fn create(pool: &SqlitePool, data: EmpleadoInsert) -> RepoResult<Empleado> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO empleados (cedula, nombre, cargo, fecha_nacimiento, sexo, fecha_ingreso, telefono, correo, estatus) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1)",
    )
    .bind(data.cedula)
    .bind(&data.nombre)
    .bind(&data.cargo)
    .bind(data.fecha_nacimiento)
    .bind(&data.sexo)
    .bind(data.fecha_ingreso)
    .bind(data.telefono)
    .bind(&data.correo)
    .execute(&mut *tx)
    .await?;

    let sql = format!("{EMPLEADO_SELECT} WHERE cedula = ?");
    let row = sqlx::query_as::<_, Empleado>(&sql)
        .bind(data.cedula)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(row)
}

/// Apply a sparse patch to an active empleado
///
/// Returns `Ok(None)` when the row is missing or inactive. Fields absent
/// from the patch are left untouched (`COALESCE` against the current
/// column value).
pub async fn update(
    pool: &SqlitePool,
    cedula: i64,
    data: EmpleadoPatch,
) -> RepoResult<Option<Empleado>> {
    let mut tx = pool.begin().await?;

    let sql = format!("{EMPLEADO_SELECT} WHERE cedula = ? AND estatus = 1");
    let existing = sqlx::query_as::<_, Empleado>(&sql)
        .bind(cedula)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        return Ok(None);
    }

    sqlx::query(
        "UPDATE empleados SET nombre = COALESCE(?1, nombre), cargo = COALESCE(?2, cargo), fecha_nacimiento = COALESCE(?3, fecha_nacimiento), sexo = COALESCE(?4, sexo), fecha_ingreso = COALESCE(?5, fecha_ingreso), telefono = COALESCE(?6, telefono), correo = COALESCE(?7, correo) WHERE cedula = ?8",
    )
    .bind(&data.nombre)
    .bind(&data.cargo)
    .bind(data.fecha_nacimiento)
    .bind(&data.sexo)
    .bind(data.fecha_ingreso)
    .bind(data.telefono)
    .bind(&data.correo)
    .bind(cedula)
    .execute(&mut *tx)
    .await?;

    let sql = format!("{EMPLEADO_SELECT} WHERE cedula = ?");
    let row = sqlx::query_as::<_, Empleado>(&sql)
        .bind(cedula)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(row))
}

/// Soft-delete an active empleado
///
/// Returns false when no active row matched, so deactivating twice is a
/// no-op reported as not-found rather than an error.
pub async fn deactivate(pool: &SqlitePool, cedula: i64) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query("UPDATE empleados SET estatus = 0 WHERE cedula = ? AND estatus = 1")
        .bind(cedula)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(rows.rows_affected() > 0)
}
